use clap::Parser;
use color_eyre::eyre::{Report, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use std::time::Instant;
use toy_rsa::ToyRsa;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// prime modulus of the demonstration group
    #[arg(short, long, default_value = "999983")]
    prime: BigInt,

    /// private key used for encryption, must be coprime to prime - 1
    #[arg(short, long, default_value = "12345")]
    key: BigInt,

    /// message to encrypt, must be in [0, prime)
    #[arg(short, long, default_value = "123456")]
    message: BigInt,

    /// draw a random message instead of --message
    #[arg(short, long, default_value = "false")]
    random_message: bool,

    /// log the intermediate values
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("Deriving exponents:");
    let start = Instant::now();
    let scheme = ToyRsa::new(opts.prime, opts.key)?;
    let duration = start.elapsed();
    println!("...done, took {} ms\n", duration.as_millis());

    let totient = scheme.modulus() - BigInt::one();
    println!(
        "p = {}, k = {}, j = {}, k * j mod (p - 1) = {}",
        scheme.modulus(),
        scheme.encryption_exponent(),
        scheme.decryption_exponent(),
        (scheme.encryption_exponent() * scheme.decryption_exponent()).mod_floor(&totient)
    );

    let message = if opts.random_message {
        scheme.random_message(&mut rand::thread_rng())
    } else {
        opts.message
    };

    println!("\nEncrypting:");
    let start = Instant::now();
    let cipher = scheme.encrypt(&message)?;
    let duration = start.elapsed();
    println!("...done, took {} ms", duration.as_millis());
    println!("message = {}, cipher = {}", message, cipher);

    println!("\nDecrypting:");
    let start = Instant::now();
    let recovered = scheme.decrypt(&cipher)?;
    let duration = start.elapsed();
    println!("...done, took {} ms", duration.as_millis());
    println!("recovered = {}", recovered);

    if recovered != message {
        return Err(Report::msg("round trip failed to recover the message"));
    }
    println!("\nRound trip recovered the original message");

    Ok(())
}
