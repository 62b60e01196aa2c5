// Post-Processor
//
// Deterministic text transforms applied to raw generated parser code:
// license header, support-module import, doc block, rule-id capture and
// the terminal export. Every step is skipped when its effect is already
// present, so reprocessing an already processed module changes nothing.

use log::warn;

use crate::recipe::ParserRecipe;

use super::error::{GenerateError, Result};

/// License notice prepended to every generated module
pub const LICENSE: &str = "\
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
";

/// Location-tracking expression as emitted by the compiler
const LOC_ANCHOR: &str = "loc: yyloc,";

/// Replacement that additionally captures a rule identifier built from the
/// last two frames of the parser state stack, joined into one token
const LOC_WITH_RULE_ID: &str =
    "loc: lexer.yylloc, ruleId: stack.slice(stack.length - 2, stack.length).join(''),";

/// Start of the generated parse function, used to place doc blocks
const PARSE_FN_ANCHOR: &str = "parse: function parse";

/// How to react when an expected anchor is missing from generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// Fail with [`GenerateError::MissingAnchor`]
    #[default]
    Strict,
    /// Skip the step with a warning; meant for bootstrapping new dialects
    /// whose generated shape is still in flux
    BestEffort,
}

/// Apply the recipe's post-processing plan to raw generated code.
///
/// Steps run in fixed order; the output is deterministic for identical
/// input and idempotent under reapplication.
pub fn apply(raw: &str, recipe: &ParserRecipe, mode: AnchorMode) -> Result<String> {
    let mut code = raw.to_string();

    if !code.starts_with(LICENSE) {
        code.insert_str(0, LICENSE);
    }
    if let Some(import) = &recipe.post_process.support_import {
        let statement = format!("import {} from '{}';", import.symbol, import.module);
        let anchor = format!("var {} = ", recipe.name);
        code = insert_before(code, recipe, &statement, "\n\n", &anchor, mode)?;
    }
    if let Some(doc) = &recipe.post_process.parse_doc {
        code = insert_before(code, recipe, doc, "", PARSE_FN_ANCHOR, mode)?;
    }
    if recipe.post_process.rule_id_capture {
        code = rewrite_rule_id(code, recipe, mode)?;
    }
    let export = format!("export default {};", recipe.post_process.export_symbol);
    if !code.contains(&export) {
        code.push('\n');
        code.push_str(&export);
        code.push('\n');
    }
    Ok(code)
}

/// Insert `text` (plus `separator`) immediately before the first occurrence
/// of `anchor`, unless it is already present.
fn insert_before(
    code: String,
    recipe: &ParserRecipe,
    text: &str,
    separator: &str,
    anchor: &str,
    mode: AnchorMode,
) -> Result<String> {
    if code.contains(text) {
        return Ok(code);
    }
    match code.find(anchor) {
        Some(position) => {
            let mut out = code;
            out.insert_str(position, &format!("{}{}", text, separator));
            Ok(out)
        }
        None => {
            missing_anchor(recipe, anchor, mode)?;
            Ok(code)
        }
    }
}

/// Extend the location-tracking expression with the rule identifier.
fn rewrite_rule_id(code: String, recipe: &ParserRecipe, mode: AnchorMode) -> Result<String> {
    if code.contains(LOC_WITH_RULE_ID) {
        return Ok(code);
    }
    if !code.contains(LOC_ANCHOR) {
        missing_anchor(recipe, LOC_ANCHOR, mode)?;
        return Ok(code);
    }
    Ok(code.replacen(LOC_ANCHOR, LOC_WITH_RULE_ID, 1))
}

fn missing_anchor(recipe: &ParserRecipe, anchor: &str, mode: AnchorMode) -> Result<()> {
    match mode {
        AnchorMode::Strict => Err(GenerateError::MissingAnchor {
            parser: recipe.name.clone(),
            anchor: anchor.to_string(),
        }),
        AnchorMode::BestEffort => {
            warn!(
                "Anchor '{}' not found in generated code for '{}', step skipped",
                anchor, recipe.name
            );
            Ok(())
        }
    }
}
