use crate::shared::error::PomscopeError;
use crate::shared::Result;
use std::hash::{Hash, Hasher};

/// MavenCoordinate value object - the canonical groupId:artifactId:version
/// identity triple for a module or dependency.
///
/// Equality and hashing are case-normalized so that coordinates can key maps
/// directly; `Display` renders the original casing.
#[derive(Debug, Clone)]
pub struct MavenCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl MavenCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// The empty coordinate, used for "no known parent" and for placeholder
    /// identities that were never resolved.
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    pub fn is_empty(&self) -> bool {
        self.group_id.is_empty() && self.artifact_id.is_empty() && self.version.is_empty()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parses a `groupId:artifactId:version` string as emitted by the GAV
    /// reader plugin. Missing trailing fields become empty strings; the empty
    /// string maps to the empty coordinate.
    pub fn from_gav(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::empty();
        }
        let mut fields = raw.split(':');
        Self::new(
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
            fields.next().unwrap_or_default(),
        )
    }

    /// Strict variant of [`from_gav`](Self::from_gav) for user-supplied
    /// coordinates. Requires at least groupId and artifactId.
    pub fn parse_gav(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let fields: Vec<&str> = raw.split(':').collect();
        if fields.len() < 2 || fields[0].is_empty() || fields[1].is_empty() {
            return Err(PomscopeError::InvalidCoordinate {
                input: raw.to_string(),
                reason: "expected at least groupId:artifactId".to_string(),
            }
            .into());
        }
        Ok(Self::new(
            fields[0],
            fields[1],
            fields.get(2).copied().unwrap_or_default(),
        ))
    }

    /// Parses one line of `dependency:tree` report output.
    ///
    /// Lines look like `|  +- javax.mail:mail:jar:1.4:compile` - tree-drawing
    /// glyphs, then colon-separated fields where the version is the
    /// second-to-last field (the trailing field is the scope). Returns `None`
    /// for lines with fewer than 3 fields after glyph stripping.
    pub fn parse_report_line(raw: &str) -> Option<Self> {
        let start = raw.find(|c: char| c.is_alphanumeric())?;
        let fields: Vec<&str> = raw[start..].trim_end().split(':').collect();
        if fields.len() < 3 {
            return None;
        }
        Some(Self::new(fields[0], fields[1], fields[fields.len() - 2]))
    }

    /// Parses a module self-identity line (`groupId:artifactId:version`, no
    /// trailing scope) by appending a synthetic scope token first.
    pub fn parse_project_line(raw: &str) -> Option<Self> {
        Self::parse_report_line(&format!("{}:compile", raw.trim_end()))
    }

    /// Lower-cased `groupId:artifactId:version` form used for comparisons.
    pub fn normalized(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl std::fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl PartialEq for MavenCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group_id.eq_ignore_ascii_case(&other.group_id)
            && self.artifact_id.eq_ignore_ascii_case(&other.artifact_id)
            && self.version.eq_ignore_ascii_case(&other.version)
    }
}

impl Eq for MavenCoordinate {}

impl Hash for MavenCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.to_ascii_lowercase().hash(state);
        self.artifact_id.to_ascii_lowercase().hash(state);
        self.version.to_ascii_lowercase().hash(state);
    }
}

impl serde::Serialize for MavenCoordinate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
