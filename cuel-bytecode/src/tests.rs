use super::*;
use proptest::prelude::*;

#[test]
fn classifies_data_opcode_and_invalid_ranges() {
    assert_eq!(classify(0), WordClass::Data(0));
    assert_eq!(classify(0x7FFF_FFFF), WordClass::Data(0x7FFF_FFFF));
    assert_eq!(classify(0xEB00_0000), WordClass::Op(Opcode::Puts));
    assert_eq!(classify(0xFF00_0000), WordClass::Op(Opcode::Ret));
    assert_eq!(classify(0x8000_0000), WordClass::Invalid);
    assert_eq!(classify(0xEA00_0000), WordClass::Invalid);
}

#[test]
fn round_trip_through_bytes() {
    let words = vec![MAGIC, 5, Opcode::Putn.as_word(), Opcode::Ret.as_word()];
    let mut buf = Vec::new();
    write_words(&mut buf, &words).unwrap();
    let read_back = parse_container(&buf).unwrap();
    assert_eq!(words, read_back);
}

#[test]
fn rejects_short_files() {
    let buf = vec![0u8; 4];
    assert!(matches!(parse_container(&buf), Err(ContainerError::TooShort)));
}

#[test]
fn rejects_misaligned_files() {
    let buf = vec![0u8; 13];
    assert!(matches!(parse_container(&buf), Err(ContainerError::NotWordAligned)));
}

#[test]
fn rejects_missing_magic() {
    let words = vec![0u32, 0, 0];
    let mut buf = Vec::new();
    write_words(&mut buf, &words).unwrap();
    assert!(matches!(parse_container(&buf), Err(ContainerError::BadMagic)));
}

proptest! {
    #[test]
    fn word_zero_is_always_the_magic_after_round_trip(
        tail in prop::collection::vec(0u32..0x8000_0000u32, 0..64)
    ) {
        let mut words = vec![MAGIC];
        words.extend(tail);
        words.push(Opcode::Ret.as_word());

        let mut buf = Vec::new();
        write_words(&mut buf, &words).unwrap();
        let read_back = parse_container(&buf).unwrap();

        prop_assert_eq!(read_back[0], MAGIC);
        prop_assert_eq!(read_back, words);
    }

    #[test]
    fn data_words_never_classify_as_opcodes(word in 0u32..0x8000_0000u32) {
        prop_assert_eq!(classify(word), WordClass::Data(word));
    }
}
