//! Demo CLI over `wallet-core`: generate a mnemonic, then derive addresses
//! for any supported family from it.
//!
//! ```text
//! wallet-cli mnemonic
//! wallet-cli address evm --path "m/44'/60'/0'/0/0"
//! wallet-cli address bitcoin --path "m/84'/0'/0'/0/0" --kind p2wpkh --network mainnet
//! wallet-cli address cosmos --path "m/44'/118'/0'/0/0" --hrp cosmos
//! wallet-cli address solana --path "m/44'/501'/0'"
//! ```
//!
//! `WALLET_MNEMONIC` (env or `.env`) supplies the phrase for every `address`
//! invocation; `WALLET_PASSPHRASE` optionally supplies the BIP-39 25th word.

use clap::{Args, Parser, Subcommand, ValueEnum};
use wallet_address::bitcoin::Network as BitcoinNetwork;
use wallet_core::address::{self, AddressRequest, BitcoinAddressKind};
use wallet_core::signer::LocalSigner;
use wallet_hd::{DerivationPath, MnemonicPhrase};

#[derive(Parser, Debug)]
#[command(name = "wallet-cli", about = "Derive multi-chain wallet addresses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generates a new random mnemonic phrase.
    Mnemonic(MnemonicArgs),
    /// Derives an address for a single path.
    Address {
        #[command(subcommand)]
        family: AddressFamily,
    },
}

#[derive(Args, Debug)]
struct MnemonicArgs {
    /// Word count: 12, 15, 18, 21, or 24.
    #[arg(long, default_value_t = 12)]
    words: usize,
}

#[derive(Subcommand, Debug)]
enum AddressFamily {
    Evm {
        #[arg(long)]
        path: String,
    },
    Bitcoin {
        #[arg(long)]
        path: String,
        #[arg(long, value_enum)]
        kind: BitcoinKindArg,
        #[arg(long, value_enum, default_value_t = NetworkArg::Mainnet)]
        network: NetworkArg,
    },
    Cosmos {
        #[arg(long)]
        path: String,
        #[arg(long)]
        hrp: String,
    },
    Solana {
        #[arg(long)]
        path: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BitcoinKindArg {
    P2pkh,
    P2wpkh,
    P2tr,
}

impl From<BitcoinKindArg> for BitcoinAddressKind {
    fn from(value: BitcoinKindArg) -> Self {
        match value {
            BitcoinKindArg::P2pkh => BitcoinAddressKind::P2pkh,
            BitcoinKindArg::P2wpkh => BitcoinAddressKind::P2wpkh,
            BitcoinKindArg::P2tr => BitcoinAddressKind::P2tr,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NetworkArg {
    Mainnet,
    Testnet,
}

impl From<NetworkArg> for BitcoinNetwork {
    fn from(value: NetworkArg) -> Self {
        match value {
            NetworkArg::Mainnet => BitcoinNetwork::Mainnet,
            NetworkArg::Testnet => BitcoinNetwork::Testnet,
        }
    }
}

type BoxError = Box<dyn std::error::Error>;

fn load_signer() -> Result<LocalSigner, BoxError> {
    let phrase = std::env::var("WALLET_MNEMONIC").map_err(|_| "WALLET_MNEMONIC is not set")?;
    let passphrase = std::env::var("WALLET_PASSPHRASE").unwrap_or_default();
    let mnemonic = MnemonicPhrase::parse(&phrase).map_err(|e| e.to_string())?;
    Ok(LocalSigner::new(mnemonic.to_seed(&passphrase)))
}

fn parse_path(raw: &str) -> Result<DerivationPath, BoxError> {
    raw.parse()
        .map_err(|e| format!("invalid derivation path {raw:?}: {e:?}").into())
}

fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Mnemonic(args) => {
            let mnemonic = MnemonicPhrase::generate(args.words).map_err(|e| e.to_string())?;
            println!("{}", mnemonic.phrase());
        }
        Command::Address { family } => {
            let signer = load_signer()?;
            let request = match family {
                AddressFamily::Evm { path } => AddressRequest::Evm {
                    path: parse_path(&path)?,
                },
                AddressFamily::Bitcoin { path, kind, network } => AddressRequest::Bitcoin {
                    path: parse_path(&path)?,
                    kind: kind.into(),
                    network: network.into(),
                },
                AddressFamily::Cosmos { path, hrp } => AddressRequest::Cosmos {
                    path: parse_path(&path)?,
                    hrp,
                },
                AddressFamily::Solana { path } => AddressRequest::Solana {
                    path: parse_path(&path)?,
                },
            };
            let addr = address::derive_address(&signer, &request)
                .map_err(|e| format!("{e:?}"))?;
            println!("{addr}");
        }
    }
    Ok(())
}
