// Recipe derivation tests

use sqlgen::common::paths::ProjectLayout;
use sqlgen::recipe::{recipes_for_dialect, static_recipes, RecipeTable};
use sqlgen::registry::DialectStructure;

fn layout() -> ProjectLayout {
    ProjectLayout::new("parse/jison", "parse")
}

fn descriptor(autocomplete: &[&str], syntax: &[&str], lexer: &str) -> DialectStructure {
    DialectStructure {
        lexer: lexer.to_string(),
        autocomplete: autocomplete.iter().map(|s| s.to_string()).collect(),
        syntax: syntax.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_two_recipes_per_dialect_with_descriptor_order() {
    let layout = layout();
    let structure = descriptor(
        &["a.jison", "b.jison", "c.jison"],
        &["x.jison", "y.jison", "z.jison"],
        "L.jisonlex",
    );

    let recipes = recipes_for_dialect(&layout, "hive", &structure);
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].name, "hiveAutocompleteParser");
    assert_eq!(recipes[1].name, "hiveSyntaxParser");

    let grammar_dir = layout.dialect_grammar_dir("hive");
    assert_eq!(
        recipes[0].source_fragments,
        vec![
            grammar_dir.join("a.jison"),
            grammar_dir.join("b.jison"),
            grammar_dir.join("c.jison")
        ]
    );
    assert_eq!(
        recipes[1].source_fragments,
        vec![
            grammar_dir.join("x.jison"),
            grammar_dir.join("y.jison"),
            grammar_dir.join("z.jison")
        ]
    );

    for recipe in &recipes {
        assert_eq!(recipe.lexer_path, Some(grammar_dir.join("L.jisonlex")));
        assert_eq!(recipe.output_dir, layout.dialect_output_dir("hive"));
        assert!(recipe.post_process.rule_id_capture);
    }
    assert_eq!(
        recipes[0].target_concat_path,
        grammar_dir.join("hiveAutocompleteParser.jison")
    );
}

#[test]
fn test_dialect_recipes_import_their_support_module() {
    let layout = layout();
    let structure = descriptor(&["a.jison"], &["a.jison"], "L.jisonlex");
    let recipes = recipes_for_dialect(&layout, "impala", &structure);

    for recipe in &recipes {
        let import = recipe.post_process.support_import.as_ref().unwrap();
        assert_eq!(import.module, "parse/sql/impala/sqlParseSupport");
        assert_eq!(import.symbol, "SqlParseSupport");
        assert_eq!(recipe.post_process.export_symbol, recipe.name);
    }
}

#[test]
fn test_static_recipes_cover_original_parsers() {
    let layout = layout();
    let table = RecipeTable::with_static_recipes(&layout);
    let names: Vec<&String> = table.names().collect();
    assert_eq!(
        names,
        vec![
            "globalSearchParser",
            "solrFormulaParser",
            "solrQueryParser",
            "sqlStatementsParser",
            "hplsqlStatementsParser"
        ]
    );

    // The statement splitters get a doc block, the solr parsers nothing
    // beyond license and export.
    let statements = table.get("sqlStatementsParser").unwrap();
    assert!(statements.post_process.parse_doc.is_some());
    let solr = table.get("solrQueryParser").unwrap();
    assert!(solr.post_process.parse_doc.is_none());
    assert!(solr.post_process.support_import.is_none());

    let global_search = table.get("globalSearchParser").unwrap();
    let import = global_search.post_process.support_import.as_ref().unwrap();
    assert_eq!(import.module, "parse/sqlParseSupport");
}

#[test]
fn test_static_recipes_are_single_source() {
    let layout = layout();
    for recipe in static_recipes(&layout) {
        assert_eq!(recipe.source_fragments.len(), 1);
        assert_eq!(recipe.source_fragments[0], recipe.target_concat_path);
        assert!(recipe.lexer_path.is_none());
        assert!(!recipe.post_process.rule_id_capture);
    }
}
