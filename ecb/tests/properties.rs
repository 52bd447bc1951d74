use aes::Aes128;
use blowfish::Blowfish;
use ecb::{BlockMode, Ecb, RustCrypto};
use quickcheck::{quickcheck, TestResult};

fn aes(key: [u8; 16]) -> RustCrypto<Aes128> {
    RustCrypto::new_from_slice(&key).unwrap()
}

quickcheck! {
    fn prop_aes_round_trip(key: (u64, u64), data: Vec<u8>) -> TestResult {
        let len = data.len() - data.len() % 16;
        if len == 0 {
            return TestResult::discard();
        }
        let data = &data[..len];

        let mut key_bytes = [0u8; 16];
        key_bytes[..8].copy_from_slice(&key.0.to_le_bytes());
        key_bytes[8..].copy_from_slice(&key.1.to_le_bytes());
        let cipher = aes(key_bytes);

        let mut buf = data.to_vec();
        Ecb::encrypter(&cipher).crypt_blocks_in_place(&mut buf);
        Ecb::decrypter(&cipher).crypt_blocks_in_place(&mut buf);
        TestResult::from_bool(buf == data)
    }

    fn prop_blowfish_round_trip(data: Vec<u8>) -> TestResult {
        let len = data.len() - data.len() % 8;
        if len == 0 {
            return TestResult::discard();
        }
        let data = &data[..len];
        let cipher = RustCrypto::<Blowfish>::new_from_slice(b"a_very_secret_key").unwrap();

        let mut ciphertext = vec![0u8; len];
        Ecb::encrypter(&cipher).crypt_blocks(&mut ciphertext, data);
        let mut plaintext = vec![0u8; len];
        Ecb::decrypter(&cipher).crypt_blocks(&mut plaintext, &ciphertext);
        TestResult::from_bool(plaintext == data)
    }

    fn prop_identical_blocks_encrypt_identically(block: (u64, u64)) -> bool {
        let cipher = aes([0x5a; 16]);
        let mut single = [0u8; 16];
        single[..8].copy_from_slice(&block.0.to_be_bytes());
        single[8..].copy_from_slice(&block.1.to_be_bytes());

        let mut doubled = [0u8; 32];
        doubled[..16].copy_from_slice(&single);
        doubled[16..].copy_from_slice(&single);

        let mut one = [0u8; 16];
        Ecb::encrypter(&cipher).crypt_blocks(&mut one, &single);
        let mut two = [0u8; 32];
        Ecb::encrypter(&cipher).crypt_blocks(&mut two, &doubled);

        two[..16] == one && two[16..] == one
    }

    fn prop_blocks_are_independent(first: Vec<u8>, second: Vec<u8>) -> TestResult {
        if first.len() < 16 || second.len() < 16 {
            return TestResult::discard();
        }
        let cipher = aes([0x11; 16]);
        let mut joined = first[..16].to_vec();
        joined.extend_from_slice(&second[..16]);

        let mut whole = vec![0u8; 32];
        Ecb::encrypter(&cipher).crypt_blocks(&mut whole, &joined);

        let mut tail = vec![0u8; 16];
        Ecb::encrypter(&cipher).crypt_blocks(&mut tail, &second[..16]);
        TestResult::from_bool(whole[16..] == tail[..])
    }
}
