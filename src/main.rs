use clap::{Arg, ArgAction, Command};

use std::{process, sync::Arc};

use cipher::{
    ecb::ECBProcessor,
    hex::{from_hex, to_hex},
    key::derive_key,
    twistermix::Cipher32,
    CipherBlock, CipherProcessor,
};

struct Args {
    decrypt: bool,
    key: String,
    text: String,
}

fn get_cipherprocessor(key: &[u8; 4]) -> Arc<dyn CipherProcessor> {
    let cipher = Cipher32::new(key).unwrap();
    let block: Arc<dyn CipherBlock> = Arc::new(cipher);

    let ecb_processor = ECBProcessor::new(block);
    let processor: Arc<dyn CipherProcessor> = Arc::new(ecb_processor);

    processor
}

fn get_args() -> Args {
    let matches = Command::new("TwisterMix")
        .about("Encrypts and decrypts short messages with the TwisterMix toy cipher")
        .arg(Arg::new("decrypt")
            .short('d')
            .long("decrypt")
            .action(ArgAction::SetTrue)
            .help("Decrypt hex ciphertext instead of encrypting"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .num_args(1)
            .required(true)
            .help("Key used for encryption and decryption"))
        .arg(Arg::new("text")
            .short('t')
            .long("text")
            .num_args(1)
            .required(true)
            .help("Plaintext to encrypt, or hex ciphertext to decrypt"))
        .get_matches();

    let decrypt = matches.get_flag("decrypt");
    let key = matches.get_one::<String>("key").unwrap();
    let text = matches.get_one::<String>("text").unwrap();

    Args {
        decrypt,
        key: key.clone(),
        text: text.clone(),
    }
}

fn main() {
    let args = get_args();

    let key = derive_key(args.key.as_bytes());
    let processor = get_cipherprocessor(&key);

    if args.decrypt {
        let hex_input: String = args.text.chars().filter(|c| !c.is_whitespace()).collect();

        // 8 hex characters per 4-byte ciphertext block
        if hex_input.len() % 8 != 0 {
            eprintln!("Ciphertext must be a multiple of 8 hexadecimal characters");
            process::exit(1);
        }

        let ciphertext = match from_hex(&hex_input) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error while reading ciphertext: {:?}", e);
                process::exit(1);
            }
        };

        match processor.decrypt_blocks(&ciphertext) {
            Ok(plaintext) => {
                println!("{}", String::from_utf8_lossy(&plaintext));
            }
            Err(e) => {
                eprintln!("Error while decrypting: {:?}", e);
                process::exit(1);
            }
        }
    } else {
        let ciphertext = processor.encrypt_blocks(args.text.as_bytes());
        println!("{}", to_hex(&ciphertext));
    }
}
