//! Per-instruction trace records and call-stack bookkeeping for the
//! external debugger. The core never records anything itself; these types
//! define the contract a debugger layers on through the bus observers and
//! a post-instruction hook. The record hash lets golden traces be diffed
//! across runs and builds.

use crc::{CRC_32_ISCSI, Crc};

use crate::cpu::Registers;
use crate::cpu::opcodes::{self, Opcode};
use crate::memory::MemoryBus;

/// Max 2 opcode bytes plus 3 operand bytes.
pub const MAX_OP_BYTES: usize = 5;
pub const MAX_MEMORY_ACCESSES: usize = 16;

/// CRC-32C, the polynomial used for all trace hashing.
const CRC32C: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

#[derive(Clone, Copy, Debug)]
pub struct TracedInstruction {
    pub op: &'static Opcode,
    pub page: u8,
    /// Raw bytes starting at the opcode. Always filled to capacity; how
    /// many belong to this instruction depends on the decoded entry (and,
    /// for indexed modes, the postbyte).
    pub op_bytes: [u8; MAX_OP_BYTES],
    pub first_operand_index: usize,
}

impl TracedInstruction {
    pub fn operand(&self, index: usize) -> u8 {
        self.op_bytes[self.first_operand_index + index]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryAccess {
    pub address: u16,
    pub value: u16,
    pub read: bool,
}

#[derive(Clone, Debug)]
pub struct InstructionTrace {
    pub instruction: TracedInstruction,
    pub pre_registers: Registers,
    pub post_registers: Registers,
    pub elapsed_cycles: u64,
    accesses: [MemoryAccess; MAX_MEMORY_ACCESSES],
    num_accesses: usize,
}

impl InstructionTrace {
    /// Start a record at the current PC: decode the instruction bytes
    /// (through `read_raw`, so device state is untouched) and snapshot the
    /// pre-op registers.
    pub fn begin(registers: &Registers, bus: &mut MemoryBus) -> Self {
        Self {
            instruction: read_instruction(registers.pc, bus),
            pre_registers: *registers,
            post_registers: Registers::default(),
            elapsed_cycles: 0,
            accesses: [MemoryAccess::default(); MAX_MEMORY_ACCESSES],
            num_accesses: 0,
        }
    }

    /// Complete the record after the instruction executed.
    pub fn finish(&mut self, registers: &Registers, elapsed_cycles: u64) {
        self.post_registers = *registers;
        self.elapsed_cycles = elapsed_cycles;
    }

    /// Record one bus access. Accesses beyond capacity are dropped.
    pub fn add_memory_access(&mut self, address: u16, value: u16, read: bool) {
        if self.num_accesses < MAX_MEMORY_ACCESSES {
            self.accesses[self.num_accesses] = MemoryAccess { address, value, read };
            self.num_accesses += 1;
        }
    }

    pub fn memory_accesses(&self) -> &[MemoryAccess] {
        &self.accesses[..self.num_accesses]
    }
}

/// Decode the instruction at `address` without perturbing device state or
/// the access observers.
pub fn read_instruction(address: u16, bus: &mut MemoryBus) -> TracedInstruction {
    let mut op_bytes = [0u8; MAX_OP_BYTES];
    for (offset, byte) in op_bytes.iter_mut().enumerate() {
        *byte = bus.read_raw(address.wrapping_add(offset as u16));
    }

    let (page, code_index) = if opcodes::is_page1_escape(op_bytes[0]) {
        (1, 1)
    } else if opcodes::is_page2_escape(op_bytes[0]) {
        (2, 1)
    } else {
        (0, 0)
    };

    TracedInstruction {
        op: opcodes::lookup(page, op_bytes[code_index]),
        page,
        op_bytes,
        first_operand_index: code_index + 1,
    }
}

/// Deterministic 32-bit hash of a trace record: CRC-32C over the decoded
/// entry, page, raw bytes, register snapshots, elapsed cycles, and the
/// access log, in that order.
pub fn hash_trace(trace: &InstructionTrace) -> u32 {
    let mut digest = CRC32C.digest();

    digest.update(&[trace.instruction.op.code, trace.instruction.op.mode as u8]);
    digest.update(&[trace.instruction.page]);
    digest.update(&trace.instruction.op_bytes);
    update_registers(&mut digest, &trace.pre_registers);
    update_registers(&mut digest, &trace.post_registers);
    digest.update(&trace.elapsed_cycles.to_be_bytes());
    for access in trace.memory_accesses() {
        digest.update(&access.address.to_be_bytes());
        digest.update(&access.value.to_be_bytes());
        digest.update(&[access.read as u8]);
    }

    digest.finalize()
}

fn update_registers(digest: &mut crc::Digest<'_, u32>, registers: &Registers) {
    digest.update(&[registers.a, registers.b, registers.dp, registers.cc]);
    digest.update(&registers.x.to_be_bytes());
    digest.update(&registers.y.to_be_bytes());
    digest.update(&registers.u.to_be_bytes());
    digest.update(&registers.s.to_be_bytes());
    digest.update(&registers.pc.to_be_bytes());
}

/// One tracked call: where we went, the stack frame it built, and where it
/// returns to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackFrame {
    pub callee_address: u16,
    pub frame_address: u16,
    pub return_address: u16,
    /// S as captured at the call, for unwinding validation.
    pub stack_pointer: u16,
}

/// Call-stack bookkeeping maintained by the debugger from its
/// post-instruction hook (BSR/JSR push, RTS/RTI pop).
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn push(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    pub fn last_callee_address(&self) -> Option<u16> {
        self.frames.last().map(|frame| frame.callee_address)
    }

    pub fn is_last_return_address(&self, address: u16) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.return_address == address)
    }
}
