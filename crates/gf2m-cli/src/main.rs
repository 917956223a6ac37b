//! Command-line interface for GF(2^m) ElGamal signatures.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gf2m_elgamal::{
    ElGamal, KeyPair, MessageDigest, PairSumDigest, PublicKey, SecretSource, Sha256Digest,
    Signature,
};
use gf2m_field::{FieldParams, LogTable};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_PRIVATE: u64 = 12345;
const DEMO_NONCE: u64 = 11;
const DEMO_MESSAGE: &[u8] = b"ElGamal signatures over GF(2^16) with discrete-log tables.\n";

/// ElGamal signatures over GF(2^m).
#[derive(Parser)]
#[command(
    name = "gf2sig",
    version,
    author,
    about = "ElGamal signatures over GF(2^m) using discrete-log tables"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the discrete-log table and run its self-checks.
    Check {
        /// Defining polynomial (0b…, 0x… or decimal). Defaults to the 16-bit field.
        #[arg(long, value_name = "POLY", value_parser = FieldParams::parse)]
        poly: Option<FieldParams>,
    },
    /// Generate a key pair.
    Keygen {
        /// Defining polynomial (0b…, 0x… or decimal). Defaults to the 16-bit field.
        #[arg(long, value_name = "POLY", value_parser = FieldParams::parse)]
        poly: Option<FieldParams>,
        /// Private exponent `a` (1 <= a <= p-2). Drawn at random when omitted.
        #[arg(long, conflicts_with = "seed")]
        private: Option<u64>,
        /// Optional RNG seed for reproducible key generation.
        #[arg(long)]
        seed: Option<u64>,
        /// Output path for the key pair.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Optional output path for the public key alone.
        #[arg(long, value_name = "FILE")]
        public_out: Option<PathBuf>,
    },
    /// Sign a file.
    Sign {
        /// Key pair produced by `keygen`.
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        /// Message to sign.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Per-message secret `k`, coprime to p-1. Drawn at random when omitted.
        #[arg(long, conflicts_with = "seed")]
        nonce: Option<u64>,
        /// Optional RNG seed for reproducible nonces.
        #[arg(long)]
        seed: Option<u64>,
        /// Message digest.
        #[arg(long, value_enum, default_value_t = DigestKind::Sha256)]
        digest: DigestKind,
        /// Output path for the signature.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Verify a signature; exits non-zero when it is rejected.
    Verify {
        /// Public key (or key pair) file.
        #[arg(long, value_name = "FILE")]
        key: PathBuf,
        /// Signed message.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Signature produced by `sign`.
        #[arg(long, value_name = "FILE")]
        signature: PathBuf,
        /// Message digest.
        #[arg(long, value_enum, default_value_t = DigestKind::Sha256)]
        digest: DigestKind,
    },
    /// Run a local demo: keygen, sign, verify, then verify a tampered copy.
    Demo {
        /// Optional RNG seed; without one the fixed demo secrets are used.
        #[arg(long)]
        seed: Option<u64>,
        /// Message digest.
        #[arg(long, value_enum, default_value_t = DigestKind::Sha256)]
        digest: DigestKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DigestKind {
    /// SHA-256, leading 64 bits.
    Sha256,
    /// Legacy 16-bit pair-sum checksum.
    PairSum,
}

impl DigestKind {
    fn build(self) -> Box<dyn MessageDigest> {
        match self {
            DigestKind::Sha256 => Box::new(Sha256Digest),
            DigestKind::PairSum => Box::new(PairSumDigest),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Check { poly } => cmd_check(poly.unwrap_or_default()),
        Commands::Keygen {
            poly,
            private,
            seed,
            out,
            public_out,
        } => cmd_keygen(
            poly.unwrap_or_default(),
            private,
            seed,
            &out,
            public_out.as_deref(),
        ),
        Commands::Sign {
            key,
            input,
            nonce,
            seed,
            digest,
            out,
        } => cmd_sign(&key, &input, nonce, seed, digest, &out),
        Commands::Verify {
            key,
            input,
            signature,
            digest,
        } => cmd_verify(&key, &input, &signature, digest),
        Commands::Demo { seed, digest } => cmd_demo(seed, digest),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(params: FieldParams) -> Result<()> {
    let table = build_table(params)?;
    table
        .check_order()
        .with_context(|| format!("self-check for {params}"))?;
    println!("{params}: order {} verified", table.order());
    Ok(())
}

fn cmd_keygen(
    params: FieldParams,
    private: Option<u64>,
    seed: Option<u64>,
    out: &Path,
    public_out: Option<&Path>,
) -> Result<()> {
    let table = build_table(params)?;
    let scheme = ElGamal::new(&table);
    let pair = match private {
        Some(exponent) => scheme.keygen(exponent),
        None => scheme.keygen_with(&mut SecretSource::new(seeded_rng(seed))),
    }
    .context("generate key pair")?;

    let bytes = pair.to_bytes().context("serialize key pair")?;
    fs::write(out, bytes).with_context(|| format!("write {}", out.display()))?;
    if let Some(path) = public_out {
        let bytes = pair.public.to_bytes().context("serialize public key")?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    }
    println!("p = {}", pair.public.modulus());
    println!("alpha = {}", pair.public.generator);
    println!("y = {}", pair.public.y);
    Ok(())
}

fn cmd_sign(
    key_path: &Path,
    input_path: &Path,
    nonce: Option<u64>,
    seed: Option<u64>,
    digest: DigestKind,
    out: &Path,
) -> Result<()> {
    let pair = load_key_pair(key_path)?;
    let table = build_table(pair.public.params)?;
    let scheme = ElGamal::with_digest(&table, digest.build());
    let message = read_message(input_path)?;

    let signature = match nonce {
        Some(k) => scheme.sign(&pair.private, &message, k),
        None => scheme.sign_with(
            &pair.private,
            &message,
            &mut SecretSource::new(seeded_rng(seed)),
        ),
    }
    .context("sign message")?;

    let bytes = signature.to_bytes().context("serialize signature")?;
    fs::write(out, &bytes).with_context(|| format!("write {}", out.display()))?;
    println!("r = {}", signature.r);
    println!("s = {}", signature.s);
    println!("signature: {}", hex::encode(bytes));
    Ok(())
}

fn cmd_verify(
    key_path: &Path,
    input_path: &Path,
    signature_path: &Path,
    digest: DigestKind,
) -> Result<()> {
    let public = load_public_key(key_path)?;
    let table = build_table(public.params)?;
    let scheme = ElGamal::with_digest(&table, digest.build());
    let message = read_message(input_path)?;
    let bytes = fs::read(signature_path)
        .with_context(|| format!("read {}", signature_path.display()))?;
    let signature = Signature::from_bytes(&bytes).context("deserialize signature")?;

    if !scheme
        .verify(&public, &message, &signature)
        .context("verify signature")?
    {
        bail!("signature {signature} rejected");
    }
    println!("signature {signature} accepted");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, digest: DigestKind) -> Result<()> {
    let params = FieldParams::default();
    let table = build_table(params)?;
    table.check_order().context("table self-check")?;
    println!("{params}: order {} verified", table.order());

    let scheme = ElGamal::with_digest(&table, digest.build());
    let (pair, signature) = match seed {
        Some(value) => {
            let mut secrets = SecretSource::new(seeded_rng(Some(value)));
            let pair = scheme.keygen_with(&mut secrets)?;
            let signature = scheme.sign_with(&pair.private, DEMO_MESSAGE, &mut secrets)?;
            (pair, signature)
        }
        None => {
            let pair = scheme.keygen(DEMO_PRIVATE)?;
            let signature = scheme.sign(&pair.private, DEMO_MESSAGE, DEMO_NONCE)?;
            (pair, signature)
        }
    };
    println!("y = {}", pair.public.y);
    println!("r = {}", signature.r);
    println!("s = {}", signature.s);

    let accepted = scheme.verify(&pair.public, DEMO_MESSAGE, &signature)?;
    println!("original message: {}", verdict(accepted));
    if !accepted {
        bail!("demo signature failed to verify");
    }

    let mut tampered = DEMO_MESSAGE.to_vec();
    tampered[0] ^= 1;
    let forged = scheme.verify(&pair.public, &tampered, &signature)?;
    println!("tampered message: {}", verdict(forged));
    if forged {
        bail!("tampered message verified; digest collision");
    }
    Ok(())
}

fn verdict(accepted: bool) -> &'static str {
    if accepted {
        "accepted"
    } else {
        "rejected"
    }
}

fn build_table(params: FieldParams) -> Result<LogTable> {
    let table = LogTable::build(params).with_context(|| format!("build table for {params}"))?;
    info!(%params, entries = table.len(), "discrete-log table ready");
    Ok(table)
}

fn read_message(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn load_key_pair(path: &Path) -> Result<KeyPair> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    KeyPair::from_bytes(&bytes).context("deserialize key pair")
}

/// Accepts either a public key file or a full key pair.
fn load_public_key(path: &Path) -> Result<PublicKey> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    match KeyPair::from_bytes(&bytes) {
        Ok(pair) => Ok(pair.public),
        Err(_) => PublicKey::from_bytes(&bytes).context("deserialize public key"),
    }
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
