use ledger_protocol::peer::TxValidationCode;

use crate::GenesisError;

/// Per-transaction validation codes, one byte per transaction, as stored in
/// the `TRANSACTIONS_FILTER` block metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxValidationFlags(Vec<u8>);

impl TxValidationFlags {
    /// `size` flags, none of them validated yet.
    pub fn new(size: usize) -> Self {
        Self::new_set_value(size, TxValidationCode::NotValidated)
    }

    pub fn new_set_value(size: usize, code: TxValidationCode) -> Self {
        Self(vec![code as u8; size])
    }

    pub fn set_flag(&mut self, index: usize, code: TxValidationCode) -> Result<(), GenesisError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(GenesisError::FlagIndex { index, len })?;
        *slot = code as u8;
        Ok(())
    }

    /// Code recorded at `index`; `None` past the end or for a byte no code maps to.
    pub fn flag(&self, index: usize) -> Option<TxValidationCode> {
        let raw = *self.0.get(index)?;
        TxValidationCode::try_from(i32::from(raw)).ok()
    }

    pub fn is_set_to(&self, index: usize, code: TxValidationCode) -> bool {
        self.0.get(index) == Some(&(code as u8))
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.is_set_to(index, TxValidationCode::Valid)
    }

    pub fn is_invalid(&self, index: usize) -> bool {
        !self.is_valid(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for TxValidationFlags {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for TxValidationFlags {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<TxValidationFlags> for Vec<u8> {
    fn from(flags: TxValidationFlags) -> Self {
        flags.0
    }
}
