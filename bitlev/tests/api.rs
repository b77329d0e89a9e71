//! Contract checks through the public API only.

use bitlev::{distance, levenshtein, levenshtein_bounded, wagner_fischer, Units};
use lv_test::{mutate, naive_levenshtein, random_units, rng};
use rand::Rng;

#[test]
fn slices_convert_into_units() {
    let a: &[u8] = b"gumbo";
    let b: &[u16] = &[103, 97, 109, 98, 111, 108];
    // gumbo vs gambol
    assert_eq!(distance(a.into(), b.into(), None).unwrap(), 2);
    assert_eq!(distance(b.into(), a.into(), None).unwrap(), 2);
}

#[test]
fn bounded_never_exceeds_k_plus_one() {
    let rng = &mut rng(23);
    for _ in 0..50 {
        let a_len = rng.gen_range(0..150);
        let a = random_units(rng, a_len, b'a' as u32, 4);
        let b_muts = rng.gen_range(0..20);
        let b = mutate(rng, &a, b_muts, b'a' as u32, 4);
        let truth = naive_levenshtein(&a, &b);
        for k in [0usize, 1, 2, 3, 4, 10, 64] {
            let d = distance(Units::U32(&a), Units::U32(&b), Some(k)).unwrap();
            assert!(d <= k + 1);
            assert_eq!(d, truth.min(k + 1));
        }
    }
}

#[test]
fn reference_kernel_matches_dispatcher() {
    let rng = &mut rng(29);
    for _ in 0..50 {
        let a_len = rng.gen_range(0..200);
        let a = random_units(rng, a_len, b'a' as u32, 6);
        let b_len = rng.gen_range(0..200);
        let b = random_units(rng, b_len, b'a' as u32, 6);
        assert_eq!(
            wagner_fischer(Units::U32(&a), Units::U32(&b)).unwrap(),
            distance(Units::U32(&a), Units::U32(&b), None).unwrap(),
        );
    }
}

#[test]
fn str_wrappers_match_decoded_units() {
    let cases = [("höhle", "hölle"), ("", "δ"), ("résumé", "resume"), ("ab", "ab")];
    for (a, b) in cases {
        let au: Vec<u32> = a.chars().map(|c| c as u32).collect();
        let bu: Vec<u32> = b.chars().map(|c| c as u32).collect();
        assert_eq!(
            levenshtein(a, b).unwrap(),
            distance(Units::U32(&au), Units::U32(&bu), None).unwrap(),
        );
        assert_eq!(
            levenshtein_bounded(a, b, 1).unwrap(),
            distance(Units::U32(&au), Units::U32(&bu), Some(1)).unwrap(),
        );
    }
}

#[test]
fn errors_format() {
    let e = bitlev::DistanceError::OutOfMemory;
    assert!(e.to_string().contains("out of memory"));
}
