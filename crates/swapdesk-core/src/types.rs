//! Core type definitions for Swapdesk
//!
//! Chain and asset identifiers follow the CAIP-2 / CAIP-19 layout:
//! `namespace:reference` for chains and `chainId/namespace:reference` for assets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AssetIdError;

/// Chain identifier (e.g. `eip155:1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub String);

impl ChainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part (`eip155`, `bip122`, `cosmos`)
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map(|(ns, _)| ns).unwrap_or(&self.0)
    }

    /// Reference part (`1`, `000000000019d6689c085ae165831e93`, ...)
    pub fn reference(&self) -> &str {
        self.0.split_once(':').map(|(_, r)| r).unwrap_or("")
    }

    pub fn is_evm(&self) -> bool {
        self.namespace() == namespaces::EIP155
    }

    pub fn is_utxo(&self) -> bool {
        self.namespace() == namespaces::BIP122
    }

    pub fn is_cosmos_sdk(&self) -> bool {
        self.namespace() == namespaces::COSMOS
    }

    /// Native fee asset of the chain. Unknown EVM chains are assumed to pay gas in slip44:60.
    pub fn fee_asset_id(&self) -> Option<AssetId> {
        match KnownChainId::from_chain_id(self) {
            Some(known) => Some(known.fee_asset_id()),
            None if self.is_evm() => Some(AssetId::from_parts(self, asset_namespaces::SLIP44, "60")),
            None => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<KnownChainId> for ChainId {
    fn from(chain: KnownChainId) -> Self {
        Self(chain.as_str().to_string())
    }
}

/// Asset identifier (e.g. `eip155:1/erc20:0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an asset id from its parts
    pub fn from_parts(chain_id: &ChainId, asset_namespace: &str, asset_reference: &str) -> Self {
        Self(format!("{}/{}:{}", chain_id, asset_namespace, asset_reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the id into chain, asset namespace and asset reference
    pub fn parse(&self) -> Result<AssetIdParts, AssetIdError> {
        let (chain, asset) = self
            .0
            .split_once('/')
            .ok_or_else(|| AssetIdError::MissingSeparator(self.0.clone()))?;

        let (chain_namespace, chain_reference) = chain
            .split_once(':')
            .ok_or_else(|| AssetIdError::InvalidChainId(chain.to_string()))?;
        if chain_namespace.is_empty() || chain_reference.is_empty() {
            return Err(AssetIdError::InvalidChainId(chain.to_string()));
        }

        let (asset_namespace, asset_reference) = asset
            .split_once(':')
            .ok_or_else(|| AssetIdError::InvalidAssetType(asset.to_string()))?;
        if asset_namespace.is_empty() || asset_reference.is_empty() || asset_reference.contains('/')
        {
            return Err(AssetIdError::InvalidAssetType(asset.to_string()));
        }

        Ok(AssetIdParts {
            chain_id: ChainId::new(chain),
            asset_namespace: asset_namespace.to_string(),
            asset_reference: asset_reference.to_string(),
        })
    }

    /// Chain of this asset
    pub fn chain_id(&self) -> Result<ChainId, AssetIdError> {
        self.parse().map(|parts| parts.chain_id)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Components of a parsed [`AssetId`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIdParts {
    pub chain_id: ChainId,
    pub asset_namespace: String,
    pub asset_reference: String,
}

/// Chain namespaces
pub mod namespaces {
    pub const EIP155: &str = "eip155";
    pub const BIP122: &str = "bip122";
    pub const COSMOS: &str = "cosmos";
}

/// Asset namespaces
pub mod asset_namespaces {
    pub const SLIP44: &str = "slip44";
    pub const ERC20: &str = "erc20";
}

/// Chains the swappers in this workspace know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownChainId {
    EthereumMainnet,
    ArbitrumMainnet,
    BitcoinMainnet,
    DashMainnet,
    ThorchainMainnet,
    MayachainMainnet,
}

impl KnownChainId {
    pub const ALL: [KnownChainId; 6] = [
        Self::EthereumMainnet,
        Self::ArbitrumMainnet,
        Self::BitcoinMainnet,
        Self::DashMainnet,
        Self::ThorchainMainnet,
        Self::MayachainMainnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EthereumMainnet => "eip155:1",
            Self::ArbitrumMainnet => "eip155:42161",
            Self::BitcoinMainnet => "bip122:000000000019d6689c085ae165831e93",
            Self::DashMainnet => "bip122:00000ffd590b1485b3caadc19b22e637",
            Self::ThorchainMainnet => "cosmos:thorchain-mainnet-v1",
            Self::MayachainMainnet => "cosmos:mayachain-mainnet-v1",
        }
    }

    /// Native fee asset of the chain
    pub fn fee_asset_id(&self) -> AssetId {
        let slip44 = match self {
            Self::EthereumMainnet | Self::ArbitrumMainnet => "60",
            Self::BitcoinMainnet => "0",
            Self::DashMainnet => "5",
            Self::ThorchainMainnet | Self::MayachainMainnet => "931",
        };
        AssetId::from_parts(&ChainId::from(*self), asset_namespaces::SLIP44, slip44)
    }

    pub fn from_chain_id(chain_id: &ChainId) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.as_str() == chain_id.as_str())
    }
}

impl fmt::Display for KnownChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KnownChainId {
    type Err = AssetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chain_id(&ChainId::new(s))
            .ok_or_else(|| AssetIdError::InvalidChainId(s.to_string()))
    }
}

/// Asset metadata needed for amount conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: AssetId,
    pub chain_id: ChainId,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// Number of decimals between base unit and display unit
    pub precision: u32,
}

/// Swapper backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapperName {
    #[serde(rename = "MAYAChain")]
    Mayachain,
    #[serde(rename = "THORChain")]
    Thorchain,
}

impl SwapperName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mayachain => "MAYAChain",
            Self::Thorchain => "THORChain",
        }
    }
}

impl fmt::Display for SwapperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broadcast transaction hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub String);

impl TxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constants
pub mod constants {
    /// Native CACAO asset on Mayachain
    pub const MAYACHAIN_ASSET_ID: &str = "cosmos:mayachain-mainnet-v1/slip44:931";

    /// Native RUNE asset on Thorchain
    pub const THORCHAIN_ASSET_ID: &str = "cosmos:thorchain-mainnet-v1/slip44:931";
}
