//! Structural errors found while matching tags
//!
//! Neither error stops a build; they are recorded on the list and the
//! affected header keeps `matched` unset.

/// A tag that could not be paired
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// A closing tag with no open tag left to close
    #[error("orphan closing tag </{name}> at offset {offset}")]
    OrphanCloser {
        name: String,
        offset: usize,
        sequence: usize,
    },

    /// An opening tag still open at end of input
    #[error("unclosed tag <{name}> at offset {offset}")]
    UnclosedOpener {
        name: String,
        offset: usize,
        sequence: usize,
    },
}

impl StructureError {
    /// Sequence number of the offending header
    pub fn sequence(&self) -> usize {
        match self {
            StructureError::OrphanCloser { sequence, .. }
            | StructureError::UnclosedOpener { sequence, .. } => *sequence,
        }
    }

    /// Byte offset of the offending tag
    pub fn offset(&self) -> usize {
        match self {
            StructureError::OrphanCloser { offset, .. }
            | StructureError::UnclosedOpener { offset, .. } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StructureError::OrphanCloser {
            name: "div".to_string(),
            offset: 4,
            sequence: 1,
        };
        assert_eq!(err.to_string(), "orphan closing tag </div> at offset 4");
        assert_eq!(err.sequence(), 1);

        let err = StructureError::UnclosedOpener {
            name: "p".to_string(),
            offset: 0,
            sequence: 0,
        };
        assert_eq!(err.to_string(), "unclosed tag <p> at offset 0");
        assert_eq!(err.offset(), 0);
    }
}
