//! Built-in repository catalog.
//!
//! Used when the configuration file does not list any repositories.

use crate::models::RepositoryDescriptor;

type Entry = (&'static str, &'static str, &'static str, &'static [&'static str]);

#[rustfmt::skip]
const CATALOG: &[Entry] = &[
    // Core
    ("ethereum", "go-ethereum", "good first issue", &["ethereum", "core", "go"]),
    ("prysmaticlabs", "prysm", "good first issue", &["ethereum", "consensus", "go"]),
    ("sigp", "lighthouse", "good first issue", &["ethereum", "consensus", "rust"]),
    ("ethereum", "ethereum-org-website", "good first issue", &["ethereum", "docs", "frontend"]),
    ("ethereum", "web3.py", "Good First Issue", &["ethereum", "python", "tooling"]),
    ("eth-brownie", "brownie", "Good First Issue", &["ethereum", "smartcontracts", "python"]),
    ("OpenZeppelin", "openzeppelin-contracts", "good first issue", &["ethereum", "smartcontracts", "solidity"]),
    ("ethereum", "fe", "good first issue", &["ethereum", "language", "rust"]),
    ("paritytech", "substrate-connect", "good first issue", &["polkadot", "infrastructure", "javascript"]),
    ("cosmos", "gaia", "good first issue", &["cosmos", "core", "go"]),
    ("solana-labs", "solana", "good first issue", &["solana", "core", "rust"]),
    ("solana-labs", "solana-program-library", "good first issue", &["solana", "smartcontracts", "rust"]),
    ("metaplex-foundation", "mpl-token-metadata", "good first issue", &["solana", "nft", "rust"]),
    ("bitcoin", "bitcoin", "good first issue", &["bitcoin", "core", "cpp"]),
    ("lightningnetwork", "lnd", "good first issue", &["bitcoin", "lightning", "go"]),
    ("ElementsProject", "lightning", "good first issue", &["bitcoin", "lightning", "c"]),
    ("ipfs", "kubo", "good first issue", &["ipfs", "web3", "go"]),
    ("Uniswap", "uniswap-interface", "good first issue", &["defi", "frontend", "react"]),

    // Ethereum tooling
    ("ethereum", "web3.js", "good first issue", &["ethereum", "tooling", "javascript"]),
    ("trufflesuite", "truffle", "good first issue", &["ethereum", "tooling", "javascript"]),
    ("ConsenSys", "mythril", "good first issue", &["ethereum", "security", "python"]),
    ("foundry-rs", "foundry", "good first issue", &["ethereum", "smartcontracts", "rust"]),
    ("ethereum", "remix-project", "good first issue", &["ethereum", "ide", "javascript"]),

    // Cardano
    ("input-output-hk", "cardano-node", "Good First Issue", &["cardano", "core", "haskell"]),
    ("input-output-hk", "cardano-wallet", "Good First Issue", &["cardano", "wallet", "haskell"]),
    ("input-output-hk", "plutus", "Good First Issue", &["cardano", "smartcontracts", "haskell"]),

    // Polkadot
    ("paritytech", "polkadot", "good first issue", &["polkadot", "core", "rust"]),
    ("paritytech", "substrate", "good first issue", &["polkadot", "framework", "rust"]),

    // Cosmos
    ("cosmos", "cosmos-sdk", "good first issue", &["cosmos", "framework", "go"]),
    ("tendermint", "tendermint", "good first issue", &["cosmos", "consensus", "go"]),

    // Solana
    ("solana-labs", "solana-web3.js", "good first issue", &["solana", "tooling", "javascript"]),
    ("metaplex-foundation", "metaplex", "good first issue", &["solana", "nft", "typescript"]),

    // Bitcoin
    ("btcsuite", "btcd", "good first issue", &["bitcoin", "core", "go"]),
    ("bitcoinjs", "bitcoinjs-lib", "good first issue", &["bitcoin", "tooling", "javascript"]),

    // DeFi
    ("aave", "protocol-v2", "good first issue", &["defi", "smartcontracts", "solidity"]),
    ("compound-finance", "compound-protocol", "good first issue", &["defi", "smartcontracts", "solidity"]),
    ("makerdao", "dai.js", "good first issue", &["defi", "tooling", "javascript"]),
    ("sushiswap", "sushiswap", "good first issue", &["defi", "smartcontracts", "solidity"]),
    ("yearn", "yearn-vaults", "good first issue", &["defi", "smartcontracts", "solidity"]),
    ("balancer-labs", "balancer-core", "good first issue", &["defi", "smartcontracts", "solidity"]),

    // NFT
    ("rarible", "protocol", "good first issue", &["nft", "smartcontracts", "solidity"]),
    ("decentraland", "marketplace", "good first issue", &["nft", "frontend", "react"]),

    // Layer 2
    ("ethereum-optimism", "optimism", "good first issue", &["layer2", "ethereum", "go"]),
    ("OffchainLabs", "arbitrum", "good first issue", &["layer2", "ethereum", "go"]),
    ("maticnetwork", "matic.js", "good first issue", &["layer2", "tooling", "javascript"]),
    ("zkSync-Community-Hub", "zksync", "good first issue", &["layer2", "smartcontracts", "solidity"]),

    // Bridges and oracles
    ("smartcontractkit", "chainlink", "good first issue", &["oracles", "smartcontracts", "go"]),
    ("interledger", "rafiki", "good first issue", &["interoperability", "javascript"]),
    ("wormhole-foundation", "wormhole", "good first issue", &["interoperability", "smartcontracts", "solidity"]),

    // Storage
    ("filecoin-project", "lotus", "good first issue", &["storage", "go"]),
    ("storj", "storj", "good first issue", &["storage", "go"]),
    ("sia-tech", "siad", "good first issue", &["storage", "go"]),

    // Identity and governance
    ("ceramicnetwork", "js-ceramic", "good first issue", &["identity", "javascript"]),
    ("ensdomains", "ens", "good first issue", &["identity", "smartcontracts", "solidity"]),
    ("aragon", "aragon-ui", "good first issue", &["governance", "frontend", "react"]),
    ("gnosis", "conditional-tokens-contracts", "good first issue", &["defi", "smartcontracts", "solidity"]),

    // Privacy
    ("zcash", "zcash", "good first issue", &["privacy", "core", "cpp"]),
    ("monero-project", "monero", "good first issue", &["privacy", "core", "cpp"]),

    // Wallets
    ("MetaMask", "metamask-extension", "good first issue", &["wallet", "frontend", "javascript"]),
    ("trustwallet", "assets", "good first issue", &["wallet", "blockchain", "json"]),

    // Explorers and indexers
    ("poanetwork", "blockscout", "good first issue", &["explorer", "elixir"]),
    ("blockchain-etl", "ethereum-etl", "good first issue", &["analytics", "python"]),
    ("graphprotocol", "graph-node", "good first issue", &["indexing", "rust"]),

    // Stablecoins
    ("ampleforth", "ampleforth-protocol", "good first issue", &["stablecoin", "smartcontracts", "solidity"]),

    // Other L1s
    ("near", "nearcore", "good first issue", &["near", "core", "rust"]),
    ("avalanche-foundation", "avalanchego", "good first issue", &["avalanche", "core", "go"]),
    ("hedera-hashgraph", "hedera-services", "good first issue", &["hedera", "core", "java"]),
    ("stellar", "stellar-core", "good first issue", &["stellar", "core", "cpp"]),
    ("algorand", "go-algorand", "good first issue", &["algorand", "core", "go"]),
    ("tezos", "tezos", "good first issue", &["tezos", "core", "ocaml"]),
    ("radicle-dev", "radicle-link", "good first issue", &["web3", "p2p", "rust"]),
    ("hyperledger", "fabric", "good first issue", &["enterprise", "blockchain", "go"]),
];

/// Returns the built-in descriptors in catalog order.
pub fn default_repositories() -> Vec<RepositoryDescriptor> {
    CATALOG
        .iter()
        .map(|(owner, repo, label, tags)| RepositoryDescriptor::new(owner, repo, label, tags))
        .collect()
}
