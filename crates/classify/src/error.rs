use chai_interchange::InterchangeError;

/// Errors raised while turning open input into a classifiable value.
///
/// Classification itself never fails; only building its input can.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// The input is a JSON kind outside the union.
    #[error("expected {expected}, got {got}")]
    UnexpectedKind {
        expected: &'static str,
        got: &'static str,
    },

    /// A literal outside a closed literal union.
    #[error("'{literal}' is not one of: {}", expected.join(", "))]
    UnknownLiteral {
        literal: String,
        expected: &'static [&'static str],
    },

    /// A discount produced a price that is not a finite number.
    #[error("discounted price of item {id} ('{name}') is not finite: {value}")]
    NonFinitePrice { id: u32, name: String, value: f64 },

    /// Structured input failed ingestion.
    #[error(transparent)]
    Ingest(#[from] InterchangeError),
}
