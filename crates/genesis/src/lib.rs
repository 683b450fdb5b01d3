//! Genesis blocks with every transaction flagged valid.
#![forbid(unsafe_code)]

use ledger_protocol::common::{
    Block, BlockData, BlockHeader, BlockMetadata, BlockMetadataIndex, ChannelHeader, Envelope,
    Header, HeaderType, Payload,
};
use ledger_protocol::peer::TxValidationCode;
use ledger_protocol::{block_data_hash, canonical_bytes};
use thiserror::Error;

mod flags;

pub use flags::TxValidationFlags;

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("genesis template failed: {0}")]
    Template(String),
    #[error("transaction index {index} out of range for {len} flags")]
    FlagIndex { index: usize, len: usize },
}

/// Source of unannotated genesis blocks.
pub trait GenesisTemplate: Send + Sync {
    fn make_genesis_block(&self, channel_id: &str) -> Result<Block, GenesisError>;
}

/// Block 0 holding a single `CONFIG` envelope for the channel. The envelope
/// carries the channel header only; config contents are left to richer templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalGenesisTemplate;

impl GenesisTemplate for MinimalGenesisTemplate {
    fn make_genesis_block(&self, channel_id: &str) -> Result<Block, GenesisError> {
        if channel_id.is_empty() {
            return Err(GenesisError::Template("channel id is empty".to_string()));
        }
        let header = Header {
            channel_header: canonical_bytes(&ChannelHeader {
                r#type: HeaderType::Config.into(),
                channel_id: channel_id.to_string(),
                ..Default::default()
            }),
            signature_header: Vec::new(),
        };
        let envelope = Envelope {
            payload: canonical_bytes(&Payload {
                header: Some(header),
                data: Vec::new(),
            }),
            signature: Vec::new(),
        };
        let data = BlockData {
            data: vec![canonical_bytes(&envelope)],
        };
        Ok(Block {
            header: Some(BlockHeader {
                number: 0,
                previous_hash: Vec::new(),
                data_hash: block_data_hash(&data),
            }),
            data: Some(data),
            metadata: Some(BlockMetadata::default()),
        })
    }
}

/// Make sure `block` has one metadata slot per `BlockMetadataIndex`.
pub fn init_block_metadata(block: &mut Block) {
    let slots = BlockMetadataIndex::CommitHash as usize + 1;
    let metadata = block.metadata.get_or_insert_with(BlockMetadata::default);
    if metadata.metadata.len() < slots {
        metadata.metadata.resize(slots, Vec::new());
    }
}

pub struct GenesisBlockFactory {
    template: Box<dyn GenesisTemplate>,
}

impl std::fmt::Debug for GenesisBlockFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenesisBlockFactory").finish_non_exhaustive()
    }
}

impl Default for GenesisBlockFactory {
    fn default() -> Self {
        Self::new(MinimalGenesisTemplate)
    }
}

impl GenesisBlockFactory {
    pub fn new(template: impl GenesisTemplate + 'static) -> Self {
        Self {
            template: Box::new(template),
        }
    }

    /// Genesis block for `channel_id` with every transaction marked valid.
    pub fn build_genesis_block(&self, channel_id: &str) -> Result<Block, GenesisError> {
        let mut block = self.template.make_genesis_block(channel_id)?;
        init_block_metadata(&mut block);

        let tx_count = block.data.as_ref().map_or(0, |data| data.data.len());
        let flags = TxValidationFlags::new_set_value(tx_count, TxValidationCode::Valid);
        if let Some(metadata) = block.metadata.as_mut() {
            metadata.metadata[BlockMetadataIndex::TransactionsFilter as usize] = flags.into();
        }

        tracing::debug!(channel_id, tx_count, "built genesis block");
        Ok(block)
    }
}

/// Genesis block from the minimal template.
pub fn build_genesis_block(channel_id: &str) -> Result<Block, GenesisError> {
    GenesisBlockFactory::default().build_genesis_block(channel_id)
}

/// Validation flags stored in `block`, empty when the block has none.
pub fn transactions_filter(block: &Block) -> TxValidationFlags {
    block
        .metadata
        .as_ref()
        .and_then(|metadata| {
            metadata
                .metadata
                .get(BlockMetadataIndex::TransactionsFilter as usize)
        })
        .map(|bytes| TxValidationFlags::from(bytes.as_slice()))
        .unwrap_or_default()
}
