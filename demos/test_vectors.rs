use serde::Serialize;
use sha3sponge::{hash_with, PaddingRule};

const TEST_VECTORS_INPUT: [&str; 3] = ["", "abc", "The quick brown fox jumps over the lazy dog"];
const TEST_VECTOR_OUTPUT_FILE: &str = "test_vectors/basic_test_vector.json";

#[derive(Serialize)]
struct TestVector {
    rule: String,
    input: String,
    output: String,
}

fn main() {
    println!("Generating test vectors...");
    let rules = [PaddingRule::Sha3, PaddingRule::Keccak, PaddingRule::Reference];
    let aligned = "a".repeat(72);
    let mut inputs: Vec<&str> = TEST_VECTORS_INPUT.to_vec();
    inputs.push(&aligned);

    let mut test_vectors = Vec::new();
    for rule in rules {
        for input in &inputs {
            test_vectors.push(TestVector {
                rule: rule.to_string(),
                input: hex::encode(input.as_bytes()),
                output: hex::encode(hash_with(input.as_bytes(), rule).unwrap()),
            });
        }
    }
    // Convert the test vectors to a json object, pretty print it
    let test_vectors_json = serde_json::to_string_pretty(&test_vectors).unwrap();
    println!("{}", test_vectors_json);
    std::fs::create_dir_all("test_vectors").unwrap();
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, test_vectors_json).unwrap();
    println!("Test vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
}
