// Streaming behavior checked against the RustCrypto sha2 crate

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::Digest as _;
use sha256_stream::{Digest, Sha256};

fn reference(data: &[u8]) -> Digest {
    let bytes: [u8; 32] = sha2::Sha256::digest(data).into();
    Digest::from(bytes)
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// Feeds `data` in random-sized chunks, including empty ones.
fn process_randomly(rng: &mut StdRng, hasher: &mut Sha256, data: &[u8]) {
    let mut rest = data;
    while !rest.is_empty() {
        let take = rng.gen_range(0..=rest.len().min(200));
        let (chunk, tail) = rest.split_at(take);
        hasher.process(chunk);
        rest = tail;
    }
}

#[test]
fn test_padding_boundary_lengths() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in [0, 55, 56, 63, 64, 65, 119, 120, 128] {
        let data = random_bytes(&mut rng, len);
        let mut hasher = Sha256::new();
        hasher.process(&data);
        assert_eq!(hasher.digest(), reference(&data), "Mismatch at length {}", len);
    }
}

#[test]
fn test_every_length_up_to_four_blocks() {
    let mut rng = StdRng::seed_from_u64(1);
    let data = random_bytes(&mut rng, 256);

    for len in 0..=data.len() {
        let mut hasher = Sha256::new();
        hasher.process(&data[..len]);
        assert_eq!(hasher.digest(), reference(&data[..len]), "Mismatch at length {}", len);
    }
}

#[test]
fn test_chunking_is_transparent() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let len = rng.gen_range(0..2000);
        let data = random_bytes(&mut rng, len);

        let mut whole = Sha256::new();
        whole.process(&data);

        let mut chunked = Sha256::new();
        process_randomly(&mut rng, &mut chunked, &data);

        assert_eq!(chunked.bytes_processed(), whole.bytes_processed());
        assert_eq!(chunked.digest(), whole.digest());
        assert_eq!(whole.digest(), reference(&data));
    }
}

#[test]
fn test_chunks_straddling_block_boundary() {
    let data = [0xa5u8; 200];

    // Partial buffer, then a run long enough to hold whole blocks
    for split in [1, 7, 63, 64, 65, 127] {
        let mut hasher = Sha256::new();
        hasher.process(&data[..split]);
        hasher.process(&data[split..]);
        assert_eq!(hasher.digest(), reference(&data), "Mismatch splitting at {}", split);
    }
}

#[test]
fn test_digest_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let data = random_bytes(&mut rng, 150);

    let mut hasher = Sha256::new();
    hasher.process(&data[..100]);

    let first = hasher.digest();
    let second = hasher.digest();
    assert_eq!(first, second);

    // Reading digests must not disturb the rest of the stream
    hasher.process(&data[100..]);
    assert_eq!(hasher.digest(), reference(&data));
}

#[test]
fn test_interleaved_digests_track_prefixes() {
    let mut rng = StdRng::seed_from_u64(99);
    let data = random_bytes(&mut rng, 1000);
    let mut hasher = Sha256::new();

    let mut end = 0;
    while end < data.len() {
        let next = (end + rng.gen_range(1..=120)).min(data.len());
        hasher.process(&data[end..next]);
        end = next;
        assert_eq!(hasher.digest(), reference(&data[..end]), "Prefix of {} bytes", end);
    }
}

#[test]
fn test_reset_leaves_no_residue() {
    let mut rng = StdRng::seed_from_u64(3);
    let noise = random_bytes(&mut rng, 333);
    let data = random_bytes(&mut rng, 77);

    let mut reused = Sha256::new();
    reused.process(&noise);
    let _ = reused.digest();
    reused.reset();
    reused.process(&data);

    let mut fresh = Sha256::new();
    fresh.process(&data);

    assert_eq!(reused.digest(), fresh.digest());
    assert_eq!(reused.bytes_processed(), 77);
}

#[test]
fn test_clones_hash_independently() {
    let mut original = Sha256::new();
    original.process(b"shared prefix ");

    let mut fork = original.clone();
    original.process(b"left");
    fork.process(b"right");

    assert_eq!(original.digest(), reference(b"shared prefix left"));
    assert_eq!(fork.digest(), reference(b"shared prefix right"));
}

#[test]
fn test_instances_on_separate_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data = vec![seed; 4096];
                let mut hasher = Sha256::new();
                for chunk in data.chunks(100) {
                    hasher.process(chunk);
                }
                (hasher.digest(), reference(&data))
            })
        })
        .collect();

    for handle in handles {
        let (actual, expected) = handle.join().expect("hashing thread panicked");
        assert_eq!(actual, expected);
    }
}
