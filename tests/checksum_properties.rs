use adler32_mod::{checksum, update, Checksum, MOD};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

proptest! {
    #[test]
    fn split_updates_compose(data in proptest::collection::vec(any::<u8>(), 0..4096), k in any::<usize>()) {
        let k = k % (data.len() + 1);
        let (a, b) = data.split_at(k);
        prop_assert_eq!(update(update(Checksum::IDENTITY, a), b), checksum(&data));
    }

    #[test]
    fn words_stay_below_modulus(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
        let c = checksum(&data);
        prop_assert!((c.s1() as u32) < MOD);
        prop_assert!((c.s2() as u32) < MOD);
    }

    #[test]
    fn naive_modulo_agrees(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let (mut a, mut b) = (1u32, 0u32);
        for &x in &data {
            a = (a + x as u32) % MOD;
            b = (b + a) % MOD;
        }
        prop_assert_eq!(checksum(&data).value(), (b << 16) | a);
    }
}

#[test]
fn many_chunks_across_block_limit() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut data = vec![0u8; 50_000];
    rng.fill(&mut data[..]);

    let whole = checksum(&data);
    let mut running = Checksum::IDENTITY;
    let mut rest = &data[..];
    while !rest.is_empty() {
        let n = rng.gen_range(1..=9000).min(rest.len());
        running = running.update(&rest[..n]);
        rest = &rest[n..];
    }
    assert_eq!(running, whole);
}

#[test]
fn empty_update_is_noop() {
    let c = checksum(b"abc");
    assert_eq!(update(c, &[]), c);
    assert_eq!(checksum(&[]).value(), 1);
}
