//! Planning-result models consumed by the report writer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
// #region QuoteModels

/// How a quoted sequence is obtained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnumOperationType {
    /// Taken from a pre-existing part catalog.
    Library,
    /// Amplified by PCR.
    Pcr,
    /// Assembled from sub-fragments.
    Assembly,
    /// Ordered from a synthesis provider.
    Synthesis,
    /// Any other planner-specific operation.
    Other(String),
}

impl EnumOperationType {
    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Library => "library",
            Self::Pcr => "pcr",
            Self::Assembly => "assembly",
            Self::Synthesis => "synthesis",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for EnumOperationType {
    fn from(tag: String) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "library" => Self::Library,
            "pcr" => Self::Pcr,
            "assembly" => Self::Assembly,
            "synthesis" => Self::Synthesis,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for EnumOperationType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<EnumOperationType> for String {
    fn from(operation_type: EnumOperationType) -> Self {
        operation_type.as_str().to_string()
    }
}

/// Method that produced a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSource {
    /// Display name of the source (station, supplier, library, ...).
    pub name: String,
    /// Operation kind.
    pub operation_type: EnumOperationType,
}

/// Known metadata fields attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteMetadata {
    /// Part the quoted fragment was designed for.
    pub subject: Option<String>,
    /// Catalog name, set on library-sourced quotes.
    pub part_name: Option<String>,
}

/// Segment of the parent sequence covered by a sub-quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecSegmentLocation {
    /// Inclusive start.
    pub start: usize,
    /// Exclusive end.
    pub end: usize,
}

/// One step of an assembly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecAssemblyPlanEntry {
    pub location: SpecSegmentLocation,
    pub quote: Quote,
}

/// Computed proposal for obtaining one DNA sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier unique within the planning session.
    pub id: String,
    pub source: QuoteSource,
    /// Ordered sub-quotes; empty for leaf quotes.
    #[serde(default)]
    pub assembly_plan: Vec<SpecAssemblyPlanEntry>,
    #[serde(default)]
    pub metadata: QuoteMetadata,
    #[serde(default)]
    pub sequence: String,
}

impl Quote {
    /// Create a leaf quote without sub-quotes or metadata.
    pub fn new(
        id: impl Into<String>,
        source_name: impl Into<String>,
        operation_type: EnumOperationType,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: QuoteSource {
                name: source_name.into(),
                operation_type,
            },
            assembly_plan: Vec::new(),
            metadata: QuoteMetadata::default(),
            sequence: sequence.into(),
        }
    }

    /// Whether the quote comes from a part catalog.
    pub fn is_library(&self) -> bool {
        self.source.operation_type == EnumOperationType::Library
    }

    /// Sub-quotes in plan order.
    pub fn subquotes(&self) -> impl Iterator<Item = &Quote> {
        self.assembly_plan.iter().map(|entry| &entry.quote)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportInputs

/// Construct name -> assembly quote.
pub type MapConstructQuotes = IndexMap<String, Quote>;
/// Name -> nucleotide sequence (primers, parts, constructs).
pub type MapSequences = IndexMap<String, String>;
/// Fragment id -> fragment quote.
pub type MapFragmentQuotes = IndexMap<String, Quote>;
/// Construct name -> error message.
pub type MapErrors = IndexMap<String, String>;
/// Construct name -> ordered part names.
pub type MapConstructParts = IndexMap<String, Vec<String>>;

/// All planning results rendered into one report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecAssemblyReport {
    pub quotes: MapConstructQuotes,
    pub primer_sequences: MapSequences,
    pub fragment_quotes: MapFragmentQuotes,
    pub errors: MapErrors,
    pub part_sequences: MapSequences,
    pub construct_parts: MapConstructParts,
    pub construct_sequences: MapSequences,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
