//! Bit-field codec and program image tests

use proptest::prelude::*;
use smips_spec::encoding::*;
use smips_spec::{Funct, Opcode, Program, SmipsError, MAX_INSTRUCTIONS};

#[test]
fn test_fields_of_known_words() {
    // add $3, $1, $2
    let word = 0x0022_1820;
    assert_eq!(extract_opcode(word), 0);
    assert_eq!(extract_rs(word), 1);
    assert_eq!(extract_rt(word), 2);
    assert_eq!(extract_rd(word), 3);
    assert_eq!(extract_funct(word), 0x20);

    // addi $4, $0, 10
    let word = 0x2004_000A;
    assert_eq!(extract_opcode(word), Opcode::Addi.to_u8() as u32);
    assert_eq!(extract_rt(word), 4);
    assert_eq!(extract_imm_signed(word), 10);
}

#[test]
fn test_sign_extend_edges() {
    assert_eq!(sign_extend16(0x0000), 0);
    assert_eq!(sign_extend16(0x7FFF), 32767);
    assert_eq!(sign_extend16(0x8000), -32768);
    assert_eq!(sign_extend16(0xFFFF), -1);
}

#[test]
fn test_program_hex_round_trip_text() {
    let program = Program::from_words(vec![0x0022_1820, 0x0000_000C]).unwrap();
    let text = program.to_hex_string();
    assert_eq!(text, "00221820\n0000000c\n");
    assert_eq!(Program::from_hex_str(&text).unwrap(), program);
}

#[test]
fn test_program_capacity() {
    let full = "0000000c\n".repeat(MAX_INSTRUCTIONS);
    assert_eq!(Program::from_hex_str(&full).unwrap().len(), MAX_INSTRUCTIONS);

    let over = "0000000c\n".repeat(MAX_INSTRUCTIONS + 1);
    assert!(matches!(
        Program::from_hex_str(&over),
        Err(SmipsError::ProgramTooLarge { max: MAX_INSTRUCTIONS })
    ));
}

#[test]
fn test_hex_loader_prefix_and_case() {
    let program = Program::from_hex_str("0x2004000A 0X0000000c\n").unwrap();
    assert_eq!(program.code, vec![0x2004_000A, 0x0000_000C]);
}

#[test]
fn test_hex_loader_stops_at_garbage() {
    let program = Program::from_hex_str("2004000a zzzz 0000000c").unwrap();
    assert_eq!(program.code, vec![0x2004_000A]);

    let program = Program::from_hex_str("2004000a 0000000cxyz 00221820").unwrap();
    assert_eq!(program.code, vec![0x2004_000A, 0x0000_000C]);
}

#[test]
fn test_bincode_image() {
    let program = Program::from_words(vec![1, 2, 3]).unwrap();
    let bytes = program.to_bytes().unwrap();
    assert_eq!(Program::from_bytes(&bytes).unwrap(), program);
    assert!(Program::from_bytes(&[0xFF]).is_err());
}

proptest! {
    #[test]
    fn prop_rtype_fields_round_trip(rd in 0u32..32, rs in 0u32..32, rt in 0u32..32) {
        let word = encode_rtype(Funct::Sub, rd, rs, rt);
        prop_assert_eq!(extract_opcode(word), 0);
        prop_assert_eq!(extract_rd(word), rd);
        prop_assert_eq!(extract_rs(word), rs);
        prop_assert_eq!(extract_rt(word), rt);
        prop_assert_eq!(extract_funct(word), Funct::Sub.to_u8() as u32);
    }

    #[test]
    fn prop_itype_immediate_round_trip(rs in 0u32..32, rt in 0u32..32, imm in any::<i16>()) {
        let word = encode_itype(Opcode::Slti, rt, rs, imm as u16 as u32);
        prop_assert_eq!(extract_opcode(word), Opcode::Slti.to_u8() as u32);
        prop_assert_eq!(extract_imm_signed(word), imm as i32);
        prop_assert_eq!(extract_imm(word), imm as u16);
    }

    #[test]
    fn prop_field_extractors_stay_in_range(word in any::<u32>()) {
        prop_assert!(extract_opcode(word) < 64);
        prop_assert!(extract_rs(word) < 32);
        prop_assert!(extract_rt(word) < 32);
        prop_assert!(extract_rd(word) < 32);
        prop_assert!(extract_funct(word) < 64);
    }
}
