use super::document::{inspect, Inspection, LoadOptions, RawAssessment};
use super::read_file;
use crate::core::Assessment;
use crate::errors::{Error, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Serialization format of an assessment document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pure function to pick a format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Pure function to deserialize a raw document from text
pub(crate) fn parse_document(
    contents: &str,
    format: DocumentFormat,
    origin: &Path,
) -> Result<RawAssessment> {
    match format {
        DocumentFormat::Json => serde_json::from_str(contents).map_err(|e| Error::parse(origin, e)),
        DocumentFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| Error::parse(origin, e)),
        DocumentFormat::Toml => toml::from_str(contents).map_err(|e| Error::parse(origin, e)),
    }
}

/// Parse and validate document text, collecting every issue
pub fn inspect_str(contents: &str, format: DocumentFormat, options: LoadOptions) -> Result<Inspection> {
    let raw = parse_document(contents, format, Path::new("<memory>"))?;
    Ok(inspect(raw, options))
}

/// Parse and validate document text into an assessment
pub fn parse_assessment(
    contents: &str,
    format: DocumentFormat,
    options: LoadOptions,
) -> Result<Assessment> {
    inspect_str(contents, format, options)?.into_result()
}

/// Read, parse and validate a document file, collecting every issue
pub fn inspect_file(path: &Path, options: LoadOptions) -> Result<Inspection> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = read_file(path)?;
    debug!(path = %path.display(), ?format, "Parsing assessment document");
    let raw = parse_document(&contents, format, path)?;
    Ok(inspect(raw, options))
}

/// Read, parse and validate a document file into an assessment
pub fn load_assessment(path: &Path, options: LoadOptions) -> Result<Assessment> {
    let inspection = inspect_file(path, options)?;
    for warning in inspection.warnings() {
        warn!("{warning}");
    }
    let assessment = inspection.into_result()?;
    info!(
        path = %path.display(),
        categories = assessment.categories.len(),
        focus_areas = assessment.focus_area_count(),
        actions = assessment.action_count(),
        "Loaded assessment"
    );
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn normalized_collections_are_logged_at_warn_level() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "categories": [ { "category": "C", "focusAreas": null } ] }"#)
            .unwrap();

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let assessment = tracing::subscriber::with_default(subscriber, || {
            load_assessment(&path, LoadOptions::default())
        })
        .unwrap();

        assert!(assessment.categories[0].focus_areas.is_empty());
        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("'focusAreas' is missing or null"), "{output}");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("a/b.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("b.YML")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("b.yaml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("b.toml")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("b.csv")), None);
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("README")), None);
    }

    #[test]
    fn unsupported_extension_fails_before_reading() {
        let err = load_assessment(Path::new("does/not/exist.csv"), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_assessment(Path::new("does/not/exist.json"), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let err = parse_assessment("{ not json", DocumentFormat::Json, LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn toml_documents_use_the_same_keys() {
        let toml = r#"
            name = "Readout"

            [[categories]]
            category = "Other Systems"

            [[categories.focusAreas]]
            title = "Lead Routing"

            [[categories.focusAreas.recommendedActions]]
            id = "OS-LR-01"
            title = "Automate routing"
            priority = "High"
            severity = "High"
            complexity = "High"
        "#;
        let assessment =
            parse_assessment(toml, DocumentFormat::Toml, LoadOptions::strict()).unwrap();
        assert_eq!(assessment.action_count(), 1);
        assert_eq!(assessment.categories[0].focus_areas[0].title, "Lead Routing");
    }
}
