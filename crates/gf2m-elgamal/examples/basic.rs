//! Builds the GF(2^16) table, signs a message and verifies it.

use gf2m_elgamal::{ElGamal, SecretSource};
use gf2m_field::{FieldParams, LogTable};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    let table = LogTable::build(FieldParams::default()).expect("default polynomial is primitive");
    let scheme = ElGamal::new(&table);

    // Deterministic seed for reproducibility in the example.
    let mut secrets = SecretSource::new(ChaCha20Rng::from_seed([1u8; 32]));
    let pair = scheme.keygen_with(&mut secrets).expect("keygen");

    let message = b"first message here";
    let signature = scheme
        .sign_with(&pair.private, message, &mut secrets)
        .expect("sign");
    assert!(scheme.verify(&pair.public, message, &signature).expect("verify"));
    assert!(!scheme
        .verify(&pair.public, b"first message hers", &signature)
        .expect("verify"));

    println!("y = {}, signature = {signature}", pair.public.y);
}
