use adler32_mod::{checksum, checksum_allowed, judge, Charset, Checksum};
use honggfuzz::fuzz;

fn main() {
    let charset = Charset::alphanumeric();
    loop {
        fuzz!(|data: &[u8]| {
            let whole = checksum(data);
            let split = data.first().map_or(0, |&b| b as usize % (data.len() + 1));
            let (a, b) = data.split_at(split);
            assert_eq!(Checksum::IDENTITY.update(a).update(b), whole);
            assert_eq!(
                judge(whole, &charset).is_allowed(),
                checksum_allowed(whole, &charset)
            );
        });
    }
}
