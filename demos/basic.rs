use sha3sponge::{hash, hash_with, PaddingRule};

fn main() -> Result<(), sha3sponge::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let input = "Hello, world!";
    let digest = hash(input.as_bytes())?;
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("SHA3-512: {}", hex::encode(digest));

    let keccak = hash_with(input.as_bytes(), PaddingRule::Keccak)?;
    println!("Keccak-512: {}", hex::encode(keccak));

    let aligned = [b'a'; 72];
    let reference = hash_with(&aligned, PaddingRule::Reference)?;
    println!("Reference model, 72 x 'a': {}", hex::encode(reference));
    Ok(())
}
