use draftsman_catalog::catalog::{lower_camel, FieldCatalog};
use draftsman_catalog::completion::{complete, CompletionKind};
use draftsman_catalog::scanner::{scan, scan_file};
use draftsman_catalog::service::CatalogService;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lower_camel() {
    assert_eq!(lower_camel("UserAccount"), "userAccount");
    assert_eq!(lower_camel("x"), "x");
    assert_eq!(lower_camel(""), "");
}

#[test]
fn test_scan_file_fields_and_getters() {
    let source = r#"
package com.example;

public class UserAccount {
    private String firstName;
    private int age = 0;
    private static String SHARED;
    private final String immutable;
    protected List<String> roles;

    public String getEmail() { return email; }
    public boolean isActive() { return active; }
}
"#;
    let mut catalog = FieldCatalog::default();
    scan_file(source, &mut catalog);

    let fields = catalog.lookup_fields("userAccount");
    assert!(fields.contains(&"firstName".to_string()));
    assert!(fields.contains(&"age".to_string()));
    assert!(fields.contains(&"roles".to_string()));
    assert!(fields.contains(&"email".to_string()));
    assert!(fields.contains(&"active".to_string()));
    // Static and final members are not template-reachable.
    assert!(!fields.contains(&"SHARED".to_string()));
    assert!(!fields.contains(&"immutable".to_string()));
}

#[test]
fn test_scan_file_record_components() {
    let source = "public record Point(int x, int y, String label) {}";
    let mut catalog = FieldCatalog::default();
    scan_file(source, &mut catalog);
    assert_eq!(catalog.lookup_fields("point"), ["x", "y", "label"]);
}

#[test]
fn test_scan_file_lombok_fields() {
    let source = r#"
@Data
public class Invoice {
    private String number;
    private BigDecimal total;
}
"#;
    let mut catalog = FieldCatalog::default();
    scan_file(source, &mut catalog);
    assert_eq!(catalog.lookup_fields("invoice"), ["number", "total"]);
}

#[test]
fn test_scan_file_strips_comments() {
    let source = r#"
public class Doc {
    // private String commentedOut;
    /* private String blockCommented; */
    private String real;
}
"#;
    let mut catalog = FieldCatalog::default();
    scan_file(source, &mut catalog);
    assert_eq!(catalog.lookup_fields("doc"), ["real"]);
}

#[test]
fn test_scan_file_aliases() {
    let source = r#"
public class PageController {
    public String show(Model model) {
        model.addAttribute("account", new UserAccount());
        model.addAttribute("owner", site.owner);
        return "page";
    }
}
"#;
    let mut catalog = FieldCatalog::default();
    catalog
        .fields
        .insert("userAccount".to_string(), vec!["firstName".to_string()]);
    scan_file(source, &mut catalog);

    assert_eq!(catalog.aliases.get("account").map(String::as_str), Some("UserAccount"));
    assert_eq!(catalog.lookup_fields("account"), ["firstName"]);
    // Dotted expressions alias to their root identifier.
    assert_eq!(catalog.aliases.get("owner").map(String::as_str), Some("site"));
}

#[test]
fn test_scan_walks_src_and_skips_target_and_test() {
    let dir = TempDir::new().unwrap();
    let main = dir.path().join("src/main/java");
    let target = dir.path().join("src/target/classes");
    let test = dir.path().join("src/test/java");
    for d in [&main, &target, &test] {
        fs::create_dir_all(d).unwrap();
    }
    fs::write(
        main.join("User.java"),
        "public class User { private String name; }",
    )
    .unwrap();
    fs::write(
        target.join("Gen.java"),
        "public class Gen { private String artifact; }",
    )
    .unwrap();
    fs::write(
        test.join("UserTest.java"),
        "public class UserTest { private String fixture; }",
    )
    .unwrap();

    let catalog = scan(dir.path());
    assert_eq!(catalog.lookup_fields("user"), ["name"]);
    assert!(catalog.lookup_fields("gen").is_empty());
    assert!(catalog.lookup_fields("userTest").is_empty());
}

#[test]
fn test_scan_missing_root_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = scan(&dir.path().join("does-not-exist"));
    assert_eq!(catalog.class_count(), 0);
}

#[test]
fn test_service_swaps_tables_atomically() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();

    let service = CatalogService::new();
    let before = service.catalog();
    assert_eq!(before.class_count(), 0);

    fs::write(
        src.join("Order.java"),
        "public class Order { private String id; }",
    )
    .unwrap();
    service.rebuild(dir.path());

    // The old snapshot is untouched; the new one sees the scan.
    assert_eq!(before.class_count(), 0);
    assert_eq!(service.catalog().lookup_fields("order"), ["id"]);
}

#[test]
fn test_completion_in_template_expressions() {
    let mut catalog = FieldCatalog::default();
    catalog.fields.insert(
        "user".to_string(),
        vec!["name".to_string(), "nickname".to_string(), "age".to_string()],
    );

    let items = complete("<p th:text=\"${user.n", &catalog);
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["name", "nickname"]);
    assert_eq!(items[0].kind, CompletionKind::Field);
    assert_eq!(items[0].detail.as_deref(), Some("Field from user"));

    // All four expression sigils work.
    for sigil in ["$", "*", "@", "~"] {
        let prefix = format!("{sigil}{{user.");
        assert_eq!(complete(&prefix, &catalog).len(), 3);
    }

    // Outside an expression there is nothing to offer.
    assert!(complete("plain user.n", &catalog).is_empty());
}

#[test]
fn test_completion_through_alias() {
    let mut catalog = FieldCatalog::default();
    catalog
        .fields
        .insert("userAccount".to_string(), vec!["email".to_string()]);
    catalog
        .aliases
        .insert("account".to_string(), "UserAccount".to_string());

    let items = complete("${account.", &catalog);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "email");
}
