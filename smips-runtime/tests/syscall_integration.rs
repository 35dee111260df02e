//! Syscall behavior through the full VM

use smips_assembler::assemble;
use smips_runtime::{HaltReason, VMConfig, VM};
use smips_spec::Register;

fn run(source: &str) -> smips_runtime::ExecutionResult {
    VM::new(assemble(source).unwrap(), VMConfig::default())
        .run()
        .unwrap()
}

#[test]
fn test_print_int() {
    let result = run(
        r#"
        addi $a0, $zero, -42
        addi $v0, $zero, 1
        syscall
        "#,
    );
    assert_eq!(result.output_string(), "-42");
    assert_eq!(result.halt_reason, HaltReason::FellOffEnd);
}

#[test]
fn test_print_char_low_byte() {
    // 0x148 has low byte 0x48 = 'H'
    let result = run(
        r#"
        addi $a0, $zero, 0x148
        addi $v0, $zero, 11
        syscall
        addi $a0, $zero, 105
        syscall
        addi $a0, $zero, 10
        syscall
        "#,
    );
    assert_eq!(result.output_string(), "Hi\n");
}

#[test]
fn test_exit_stops_execution() {
    let result = run(
        r#"
        addi $v0, $zero, 10
        syscall
        addi $t0, $zero, 1
        "#,
    );
    assert_eq!(result.halt_reason, HaltReason::Exit);
    assert_eq!(result.steps, 2);
    assert_eq!(result.registers.read(Register::T0), 0);
    assert!(result.output.is_empty());
}

#[test]
fn test_unknown_syscall_prints_diagnostic_and_stops() {
    let result = run(
        r#"
        addi $a0, $zero, 7
        addi $v0, $zero, 1
        syscall
        addi $v0, $zero, 5
        syscall
        addi $t0, $zero, 1
        "#,
    );
    assert_eq!(result.output_string(), "7Unknown system call: 5\n");
    assert_eq!(result.halt_reason, HaltReason::UnknownSyscall(5));
    assert_eq!(result.registers.read(Register::T0), 0);
}

#[test]
fn test_syscall_with_zero_code_is_unknown() {
    let result = run("syscall\n");
    assert_eq!(result.halt_reason, HaltReason::UnknownSyscall(0));
    assert_eq!(result.output_string(), "Unknown system call: 0\n");
}

#[test]
fn test_syscall_preserves_registers() {
    let result = run(
        r#"
        addi $a0, $zero, 3
        addi $v0, $zero, 1
        syscall
        "#,
    );
    assert_eq!(result.registers.read(Register::A0), 3);
    assert_eq!(result.registers.read(Register::V0), 1);
    assert_eq!(
        result.registers.to_string(),
        "$2  = 1\n$4  = 3\n"
    );
}
