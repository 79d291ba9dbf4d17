//! The typed payload crossing the source/target boundary.
//!
//! On the wire it is a single entry: `text/plain` => project id.

use tracker_models::ProjectId;

use crate::error::{PayloadError, Result};
use crate::transfer::DataTransfer;

/// Payload kinds this protocol understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// `text/plain`: the value is a bare project id.
    PlainText,
}

impl PayloadKind {
    /// MIME-style key used in the transfer.
    pub fn mime(&self) -> &'static str {
        match self {
            PayloadKind::PlainText => "text/plain",
        }
    }

    /// Maps a declared kind back to a known one.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/plain" => Some(PayloadKind::PlainText),
            _ => None,
        }
    }
}

/// A project id tagged with its payload kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub id: ProjectId,
}

impl DragPayload {
    /// Creates a `text/plain` payload for `id`.
    pub fn plain(id: impl Into<ProjectId>) -> Self {
        Self {
            kind: PayloadKind::PlainText,
            id: id.into(),
        }
    }

    /// Writes this payload into `transfer`.
    pub fn write(&self, transfer: &mut DataTransfer) {
        transfer.set_data(self.kind.mime(), self.id.as_str());
    }

    /// Reads and validates the payload a transfer carries.
    ///
    /// Only the first declared kind is considered.
    pub fn read(transfer: &DataTransfer) -> Result<Self> {
        let declared = transfer.types().first().copied().ok_or(PayloadError::Empty)?;
        let kind = PayloadKind::from_mime(declared)
            .ok_or_else(|| PayloadError::UnsupportedKind(declared.to_string()))?;

        let value = transfer.get_data(kind.mime()).unwrap_or_default();
        if value.is_empty() {
            return Err(PayloadError::EmptyId);
        }

        Ok(Self {
            kind,
            id: ProjectId::from_string(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut transfer = DataTransfer::new();
        DragPayload::plain("p1").write(&mut transfer);

        assert_eq!(transfer.types(), vec!["text/plain"]);
        assert_eq!(transfer.get_data("text/plain"), Some("p1"));
        assert_eq!(DragPayload::read(&transfer), Ok(DragPayload::plain("p1")));
    }

    #[test]
    fn test_read_empty_transfer() {
        assert_eq!(
            DragPayload::read(&DataTransfer::new()),
            Err(PayloadError::Empty)
        );
    }

    #[test]
    fn test_read_unsupported_first_kind() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("application/json", "{\"id\":\"p1\"}");
        transfer.set_data("text/plain", "p1");

        assert_eq!(
            DragPayload::read(&transfer),
            Err(PayloadError::UnsupportedKind("application/json".to_string()))
        );
    }

    #[test]
    fn test_read_empty_id() {
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/plain", "");

        assert_eq!(DragPayload::read(&transfer), Err(PayloadError::EmptyId));
    }

    #[test]
    fn test_kind_mime_mapping() {
        assert_eq!(PayloadKind::PlainText.mime(), "text/plain");
        assert_eq!(PayloadKind::from_mime("text/plain"), Some(PayloadKind::PlainText));
        assert_eq!(PayloadKind::from_mime("text/html"), None);
    }
}
