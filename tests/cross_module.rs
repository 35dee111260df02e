//! Cross-crate consistency: assembler, decoder, listing and runtime agree

use proptest::prelude::*;
use smips_assembler::{assemble, encode};
use smips_disassembler::{decode, disassemble, format};
use smips_runtime::{execute, IOHandler, RegisterFile, StepOutcome};
use smips_spec::{Instruction, Program, Register};

fn register() -> impl Strategy<Value = Register> {
    (0usize..32).prop_map(|i| Register::from_index(i).unwrap())
}

fn instruction() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::Add { rd, rs, rt }),
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::Sub { rd, rs, rt }),
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::And { rd, rs, rt }),
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::Or { rd, rs, rt }),
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::Slt { rd, rs, rt }),
        (register(), register(), register()).prop_map(|(rd, rs, rt)| Instruction::Mul { rd, rs, rt }),
        (register(), register(), any::<i16>())
            .prop_map(|(rs, rt, imm)| Instruction::Beq { rs, rt, imm: imm as i32 }),
        (register(), register(), any::<i16>())
            .prop_map(|(rs, rt, imm)| Instruction::Bne { rs, rt, imm: imm as i32 }),
        (register(), register(), any::<i16>())
            .prop_map(|(rt, rs, imm)| Instruction::Addi { rt, rs, imm: imm as i32 }),
        (register(), register(), any::<i16>())
            .prop_map(|(rt, rs, imm)| Instruction::Slti { rt, rs, imm: imm as i32 }),
        (register(), register(), any::<u16>()).prop_map(|(rt, rs, imm)| Instruction::Andi { rt, rs, imm }),
        (register(), register(), any::<u16>()).prop_map(|(rt, rs, imm)| Instruction::Ori { rt, rs, imm }),
        (register(), any::<u16>()).prop_map(|(rt, imm)| Instruction::Lui { rt, imm }),
        Just(Instruction::Syscall),
    ]
}

proptest! {
    #[test]
    fn prop_encode_decode_round_trip(instr in instruction()) {
        prop_assert_eq!(decode(encode(&instr)), Ok(instr));
    }

    #[test]
    fn prop_listing_text_reassembles(instr in instruction()) {
        let program = assemble(&format(&instr)).unwrap();
        prop_assert_eq!(program.code, vec![encode(&instr)]);
    }

    #[test]
    fn prop_non_branch_advances_by_one(instr in instruction(), pc in 0usize..1000) {
        prop_assume!(!matches!(
            instr,
            Instruction::Beq { .. } | Instruction::Bne { .. } | Instruction::Syscall
        ));
        let mut regs = RegisterFile::new();
        let mut io = IOHandler::new(Vec::new());
        let outcome = execute(&instr, pc, &mut regs, &mut io).unwrap();
        prop_assert_eq!(outcome, StepOutcome::Continue(pc + 1));
        prop_assert_eq!(regs.read(Register::R0), 0);
    }
}

#[test]
fn test_full_listing_round_trip() {
    let source = r#"
        addi $1, $0, 5
        addi $2, $0, -7
        slt  $3, $2, $1
        andi $4, $2, 0xff
        ori  $5, $0, 0xffff
        lui  $6, 1
        mul  $7, $1, $2
        beq  $3, $0, 2
        sub  $8, $1, $2
        syscall
    "#;
    let program = assemble(source).unwrap();
    let listing = disassemble(&program).unwrap();

    // Strip the "  N: " index column and feed the text back in
    let text: String = listing
        .lines()
        .map(|line| format!("{}\n", &line[5..]))
        .collect();
    assert_eq!(assemble(&text).unwrap(), program);
}

#[test]
fn test_hex_and_bincode_images_agree() {
    let program = assemble("addi $4, $0, 1\naddi $2, $0, 1\nsyscall\n").unwrap();
    let from_hex = Program::from_hex_str(&program.to_hex_string()).unwrap();
    let from_bin = Program::from_bytes(&program.to_bytes().unwrap()).unwrap();
    assert_eq!(from_hex, program);
    assert_eq!(from_bin, program);
}
