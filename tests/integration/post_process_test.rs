// Post-processor tests

use anyhow::Result;

use sqlgen::codegen::post_process::{apply, AnchorMode, LICENSE};
use sqlgen::codegen::GenerateError;
use sqlgen::common::paths::ProjectLayout;
use sqlgen::recipe::{recipes_for_dialect, static_recipes, ParserRecipe};
use sqlgen::registry::DialectStructure;

fn layout() -> ProjectLayout {
    ProjectLayout::new("parse/jison", "parse")
}

fn hive_autocomplete_recipe() -> ParserRecipe {
    let structure = DialectStructure {
        lexer: "sql.jisonlex".to_string(),
        autocomplete: vec!["sql_main.jison".to_string()],
        syntax: vec!["sql_main.jison".to_string()],
    };
    recipes_for_dialect(&layout(), "hive", &structure).remove(0)
}

fn raw_parser_code(name: &str) -> String {
    format!(
        "/* parser generated by jison */\n\
         var {} = (function () {{\n\
         var parser = {{\n\
           parse: function parse(input) {{\n\
             this.$ = {{ loc: yyloc, }};\n\
             return input;\n\
           }}\n\
         }};\n\
         return parser;\n\
         }})();\n",
        name
    )
}

#[test]
fn test_dialect_post_process_applies_all_steps() -> Result<()> {
    let recipe = hive_autocomplete_recipe();
    let processed = apply(
        &raw_parser_code("hiveAutocompleteParser"),
        &recipe,
        AnchorMode::Strict,
    )?;

    assert!(processed.starts_with(LICENSE));
    assert!(processed.contains(
        "import SqlParseSupport from 'parse/sql/hive/sqlParseSupport';\n\nvar hiveAutocompleteParser = "
    ));
    assert!(processed.contains(
        "loc: lexer.yylloc, ruleId: stack.slice(stack.length - 2, stack.length).join(''),"
    ));
    assert!(!processed.contains("loc: yyloc,"));
    assert!(processed.ends_with("\nexport default hiveAutocompleteParser;\n"));
    Ok(())
}

#[test]
fn test_post_process_is_idempotent() -> Result<()> {
    let recipe = hive_autocomplete_recipe();
    let raw = raw_parser_code("hiveAutocompleteParser");

    let once = apply(&raw, &recipe, AnchorMode::Strict)?;
    let twice = apply(&once, &recipe, AnchorMode::Strict)?;

    assert_eq!(once, twice);
    assert_eq!(twice.matches("Licensed under the Apache License").count(), 1);
    assert_eq!(
        twice.matches("export default hiveAutocompleteParser;").count(),
        1
    );
    assert_eq!(twice.matches("import SqlParseSupport").count(), 1);
    Ok(())
}

#[test]
fn test_missing_factory_anchor_fails_in_strict_mode() {
    let recipe = hive_autocomplete_recipe();
    // Generated code without the expected factory assignment.
    let raw = "var somethingElse = {};\nthis.$ = { loc: yyloc, };\n";

    let err = apply(raw, &recipe, AnchorMode::Strict).unwrap_err();
    match err {
        GenerateError::MissingAnchor { parser, anchor } => {
            assert_eq!(parser, "hiveAutocompleteParser");
            assert_eq!(anchor, "var hiveAutocompleteParser = ");
        }
        other => panic!("expected MissingAnchor, got {:?}", other),
    }
}

#[test]
fn test_best_effort_skips_missing_anchors() -> Result<()> {
    let recipe = hive_autocomplete_recipe();
    let raw = "var somethingElse = {};\n";

    let processed = apply(raw, &recipe, AnchorMode::BestEffort)?;
    assert!(processed.starts_with(LICENSE));
    assert!(!processed.contains("import SqlParseSupport"));
    assert!(processed.ends_with("\nexport default hiveAutocompleteParser;\n"));
    Ok(())
}

#[test]
fn test_statements_parser_gets_doc_block() -> Result<()> {
    let recipes = static_recipes(&layout());
    let statements = recipes
        .into_iter()
        .find(|recipe| recipe.name == "sqlStatementsParser")
        .unwrap();

    let processed = apply(
        &raw_parser_code("sqlStatementsParser"),
        &statements,
        AnchorMode::Strict,
    )?;
    assert!(processed.contains("@return {SqlStatementsParserResult}\n */\nparse: function parse"));
    Ok(())
}

#[test]
fn test_solr_parsers_only_get_license_and_export() -> Result<()> {
    let recipes = static_recipes(&layout());
    let solr = recipes
        .into_iter()
        .find(|recipe| recipe.name == "solrQueryParser")
        .unwrap();

    let raw = raw_parser_code("solrQueryParser");
    let processed = apply(&raw, &solr, AnchorMode::Strict)?;

    assert_eq!(
        processed,
        format!("{}{}\nexport default solrQueryParser;\n", LICENSE, raw)
    );
    Ok(())
}
