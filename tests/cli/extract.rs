use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const KEYS: &str = "localization/translation-keys.json";
const MISSING: &str = "localization/missing-translations.json";
const REPORT: &str = "localization/translation-report.md";

fn without_timestamp(mut doc: Value) -> Value {
    doc.as_object_mut().unwrap().remove("extractedAt");
    doc
}

fn greeting_project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "src/Home.js",
        r#"
  export function Home() {
      return (
          <View>
              <Text>{t("greeting.hello")}</Text>
              <Text>{t("greeting.hello")}</Text>
              <Button title={t('farewell.bye')} />
          </View>
      );
  }
  "#,
    )?;
    test.write_file(
        "localization/en.json",
        r#"{ "greeting": { "hello": "Hello" } }"#,
    )?;
    test.write_file(
        "localization/ja.json",
        r#"{ "greeting": { "hello": "こんにちは" } }"#,
    )?;
    Ok(test)
}

#[test]
fn test_greeting_and_farewell() -> Result<()> {
    let test = greeting_project()?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));

    let keys = test.read_json(KEYS)?;
    assert_eq!(
        without_timestamp(keys),
        json!({
            "totalKeys": 2,
            "keys": ["farewell.bye", "greeting.hello"]
        })
    );

    let missing = test.read_json(MISSING)?;
    assert_eq!(
        without_timestamp(missing),
        json!({
            "totalMissing": 1,
            "missing": { "farewell.bye": ["en", "ja"] }
        })
    );

    let out = stdout(&output);
    assert!(out.contains("Processed: src/Home.js"));
    assert!(out.contains("Total translation calls:  3"));
    assert!(out.contains("Unique translation keys:  2"));
    assert!(out.contains("farewell.bye - Missing in: en, ja"));

    Ok(())
}

#[test]
fn test_report_document() -> Result<()> {
    let test = greeting_project()?;

    let output = test.run()?;
    assert_eq!(output.status.code(), Some(0));

    let report = test.read_file(REPORT)?;
    insta::with_settings!({
        filters => vec![(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z", "[TIMESTAMP]")]
    }, {
        insta::assert_snapshot!(report, @r"
        # Translation Extraction Report

        Generated: [TIMESTAMP]

        ## Summary Statistics

        - **Files Processed**: 1
        - **Files with Translations**: 1
        - **Total Translation Keys**: 3
        - **Unique Keys**: 2
        - **Missing Translations**: 1

        ## Extracted Translation Keys

        - `farewell.bye`
        - `greeting.hello`

        ## Missing Translations

        - `farewell.bye` - Missing in: en, ja

        ## Recommendations

        ### For Missing `en` Translations:
        1. Add translations to `./localization/en.json`
        2. Use descriptive, user-friendly text
        3. Keep terminology consistent across screens

        ### For Missing `ja` Translations:
        1. Add translations to `./localization/ja.json`
        2. Use descriptive, user-friendly text
        3. Keep terminology consistent across screens

        ### Next Steps:
        1. Review missing translations
        2. Add missing keys to translation files
        3. Test the app in `en` and `ja`
        4. Validate wording with native speakers
        5. Update store listings and other metadata accordingly

        ## Quality Assurance Checklist

        - [ ] All keys have `en` translations
        - [ ] All keys have `ja` translations
        - [ ] Politeness level and tone fit each audience
        - [ ] Technical terms are consistently translated
        - [ ] UI text fits within interface constraints
        - [ ] Cultural adaptations are considered
        - [ ] Currency and date formatting is locale-appropriate

        ---

        **Generated by i18n-extract**
        ");
    });

    Ok(())
}

#[test]
fn test_no_locale_files() -> Result<()> {
    let test = CliTest::with_file("App.tsx", r#"t("nav.home"); t(`nav.settings`);"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("warning: Locale file ./localization/en.json not found"));
    assert!(err.contains("warning: Locale file ./localization/ja.json not found"));

    let missing = test.read_json(MISSING)?;
    assert_eq!(
        without_timestamp(missing),
        json!({
            "totalMissing": 2,
            "missing": {
                "nav.home": ["en", "ja"],
                "nav.settings": ["en", "ja"]
            }
        })
    );

    Ok(())
}

#[test]
fn test_empty_source_tree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("docs/README.md", r#"Call t("not.scanned") to translate."#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        without_timestamp(test.read_json(KEYS)?),
        json!({ "totalKeys": 0, "keys": [] })
    );
    assert_eq!(
        without_timestamp(test.read_json(MISSING)?),
        json!({ "totalMissing": 0, "missing": {} })
    );

    let report = test.read_file(REPORT)?;
    assert!(report.contains("- **Files Processed**: 0"));
    assert!(report.contains("No missing translations found!"));

    Ok(())
}

#[test]
fn test_missing_in_one_locale() -> Result<()> {
    let test = CliTest::with_file("screens/Settings.jsx", r#"t("settings.title")"#)?;
    test.write_file(
        "localization/en.json",
        r#"{ "settings": { "title": "Settings" } }"#,
    )?;
    test.write_file("localization/ja.json", r#"{ "settings": { "title": "" } }"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_json(MISSING)?["missing"],
        json!({ "settings.title": ["ja"] })
    );

    Ok(())
}

#[test]
fn test_malformed_locale_file() -> Result<()> {
    let test = CliTest::with_file("App.js", r#"t("title")"#)?;
    test.write_file("localization/en.json", r#"{ "title": "Title" }"#)?;
    test.write_file("localization/ja.json", r#"{ "title": "#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Could not load locale file ./localization/ja.json"));
    assert_eq!(
        test.read_json(MISSING)?["missing"],
        json!({ "title": ["ja"] })
    );

    Ok(())
}

#[test]
fn test_excluded_directories() -> Result<()> {
    let test = CliTest::with_file("src/App.js", r#"t("app.title")"#)?;
    test.write_file("node_modules/lib/index.js", r#"t("vendor.key")"#)?;
    test.write_file("packages/ui/build/out.js", r#"t("build.key")"#)?;
    test.write_file("packages/ui/dist/out.js", r#"t("dist.key")"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_json(KEYS)?["keys"], json!(["app.title"]));

    Ok(())
}

#[test]
fn test_unreadable_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file("src/App.js", r#"t("app.title")"#)?;
    std::fs::write(test.root().join("src/blob.js"), [0xff, 0xfe, 0xfd])?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Could not process src/blob.js"));
    assert_eq!(test.read_json(KEYS)?["keys"], json!(["app.title"]));

    Ok(())
}

#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let test = greeting_project()?;

    test.run()?;
    let first_keys = without_timestamp(test.read_json(KEYS)?);
    let first_missing = without_timestamp(test.read_json(MISSING)?);

    test.run()?;
    assert_eq!(without_timestamp(test.read_json(KEYS)?), first_keys);
    assert_eq!(without_timestamp(test.read_json(MISSING)?), first_missing);

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18n-extract.json",
        r#"{
         "sourceRoot": "app",
         "outputDir": "i18n",
         "translationFunction": "i18n.t",
         "secondaryLocale": "fr",
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file("app/Home.ts", r#"i18n.t("home.title"); t("plain.t")"#)?;
    test.write_file("app/generated/strings.ts", r#"i18n.t("generated.key")"#)?;
    test.write_file("other/Ignored.ts", r#"i18n.t("outside.root")"#)?;
    test.write_file("i18n/en.json", r#"{ "home": { "title": "Home" } }"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_json("i18n/translation-keys.json")?["keys"],
        json!(["home.title"])
    );
    assert_eq!(
        test.read_json("i18n/missing-translations.json")?["missing"],
        json!({ "home.title": ["fr"] })
    );

    Ok(())
}

#[test]
fn test_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("web/Page.tsx", r#"t("page.title")"#)?;

    let output = test
        .command()
        .args(["--source-root", "web", "--output-dir", "out/locales"])
        .args(["--primary-locale", "de", "--secondary-locale", "fr"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_json("out/locales/missing-translations.json")?["missing"],
        json!({ "page.title": ["de", "fr"] })
    );

    Ok(())
}

#[test]
fn test_unwritable_output_dir_fails() -> Result<()> {
    let test = CliTest::with_file("App.js", r#"t("title")"#)?;
    test.write_file("localization", "not a directory")?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("warning: Locale file ./localization/en.json not found"));
    assert!(err.contains("warning: Locale file ./localization/ja.json not found"));
    assert!(err.contains("Error: Failed to create directory"));
    assert!(stdout(&output).contains("Processed: App.js"));

    Ok(())
}

#[test]
fn test_missing_source_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--source-root", "absent"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(".i18n-extract.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}
