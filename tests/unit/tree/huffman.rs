use super::*;

fn five() -> HuffmanTree {
    HuffmanTree::from_weights([('a', 5.0), ('b', 5.0), ('c', 10.0), ('d', 30.0), ('e', 50.0)])
        .unwrap()
}

#[test]
fn root_weight_is_total() {
    assert_eq!(five().root_weight().unwrap(), 100.0);
}

#[test]
fn codes_are_prefix_free() {
    let t = five();
    let codes: Vec<String> = t.codes.values().map(|c| c.to_string()).collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
            }
        }
    }
}

#[test]
fn heavier_symbols_get_shorter_codes() {
    let t = five();
    assert_eq!(t.codes[&'e'].len(), 1);
    assert!(t.codes[&'a'].len() >= t.codes[&'d'].len());
}

#[test]
fn encode_decode_round_trip() {
    let text = "Jack and Jill went up the hill";
    let t = HuffmanTree::from_text(text).unwrap();
    let bits = t.encode(text).unwrap();
    assert_eq!(t.decode(&bits).unwrap(), text);
}

#[test]
fn single_symbol_alphabet_uses_one_bit_codes() {
    let t = HuffmanTree::from_text("aaaa").unwrap();
    assert_eq!(t.codes[&'a'].to_string(), "0");
    assert_eq!(t.decode("000").unwrap(), "aaa");
}

#[test]
fn rejects_bad_weights() {
    assert!(HuffmanTree::from_weights([('a', 0.0)]).is_err());
    assert!(HuffmanTree::from_weights([('a', f64::NAN)]).is_err());
    assert!(HuffmanTree::from_weights([('a', 1.0), ('a', 2.0)]).is_err());
    assert!(HuffmanTree::from_weights(Vec::<(char, f64)>::new()).is_err());
}

#[test]
fn decode_rejects_truncated_input() {
    let t = five();
    let mut bits = t.encode("a").unwrap();
    bits.pop();
    assert!(t.decode(&bits).is_err());
}
