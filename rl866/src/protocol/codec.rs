// rl866/src/protocol/codec.rs

use log::warn;

use crate::constants::{PCB_S_BLOCK, PCB_SEQUENCE_BIT};
use crate::types::ResourceId;
use crate::{ProtocolError, Result};

use super::Frame;
use super::commands::Command;
use super::cursor::ByteCursor;
use super::responses::{Response, expect_command_code};
use super::sequence::{BlockType, SequenceCheck, SequenceState};

/// Build an I-Block request around `information_field`.
///
/// The information field must start with a known command code. The current
/// sequence bit is stamped into the PCB and the state flips; on any error
/// the state is left untouched.
pub fn build_request(
    sequence: &mut SequenceState,
    resource_id: ResourceId,
    information_field: Vec<u8>,
) -> Result<Frame> {
    let code = information_field.first().copied().ok_or_else(|| {
        ProtocolError::InvalidParameter("request information field is empty".into())
    })?;
    if !Command::is_known_code(code) {
        return Err(ProtocolError::UnknownCommand(code));
    }

    let bit = sequence.advance()?;
    // I-Block, chaining clear
    let pcb = bit << 6;
    Ok(Frame::new(pcb, resource_id, information_field))
}

/// Build the resync S-Block and reset the sequence state to 0.
pub fn build_resync(sequence: &mut SequenceState, resource_id: ResourceId) -> Frame {
    sequence.reset();
    Frame::new(PCB_S_BLOCK, resource_id, Vec::new())
}

/// Split received bytes into a frame envelope.
pub fn decode_envelope(bytes: &[u8]) -> Result<Frame> {
    Frame::decode_envelope(bytes)
}

/// Encode a Command and wrap it in a sequence-stamped I-Block.
pub fn encode_command_frame(
    sequence: &mut SequenceState,
    resource_id: ResourceId,
    cmd: &Command,
) -> Result<Frame> {
    build_request(sequence, resource_id, cmd.encode()?)
}

/// Fail with `InvalidFrame` unless `frame` is of the expected block type.
pub fn check_block_type(frame: &Frame, expected: BlockType) -> Result<()> {
    let actual = frame.block_type()?;
    if actual != expected {
        return Err(ProtocolError::InvalidFrame(format!(
            "expected {:?} block, got {:?} (pcb {:#04x})",
            expected,
            actual,
            frame.pcb()
        )));
    }
    Ok(())
}

/// The reader echoes the RID of the request it answers.
pub fn check_resource_id(request: &Frame, response: &Frame) -> Result<()> {
    if request.resource_id() != response.resource_id() {
        return Err(ProtocolError::ResourceMismatch {
            expected: request.resource_id().as_u8(),
            actual: response.resource_id().as_u8(),
        });
    }
    Ok(())
}

/// Cross-check the response's sequence bit against the request's.
///
/// The reader answers an I-Block with the same sequence number it received.
/// The host state is never driven from this bit.
pub fn check_sequence(request: &Frame, response: &Frame, policy: SequenceCheck) -> Result<()> {
    let expected = request.sequence_bit();
    let actual = response.sequence_bit();
    if expected == actual {
        return Ok(());
    }
    match policy {
        SequenceCheck::Ignore => Ok(()),
        SequenceCheck::Warn => {
            warn!(
                "response sequence bit {} does not echo request bit {}",
                actual, expected
            );
            Ok(())
        }
        SequenceCheck::Strict => Err(ProtocolError::SequenceMismatch { expected, actual }),
    }
}

/// Validate the envelope of the bytes answering `request` and that the
/// information field echoes the request's command code.
///
/// Anything failing here means the exchange itself went wrong (short or
/// foreign frame, wrong block type, wrong echo), so the reader's sequence
/// expectation is unknown afterwards.
pub fn check_response_frame(
    request: &Frame,
    bytes: &[u8],
    policy: SequenceCheck,
) -> Result<Frame> {
    let expected_cmd = request
        .command_code()
        .ok_or_else(|| ProtocolError::InvalidState("request carries no command code".into()))?;

    let response = decode_envelope(bytes)?;
    check_block_type(&response, BlockType::Information)?;
    check_resource_id(request, &response)?;
    check_sequence(request, &response, policy)?;

    let mut cur = ByteCursor::new(response.information_field());
    expect_command_code(&mut cur, expected_cmd)?;
    Ok(response)
}

/// Decode the bytes answering `request` into a typed Response.
///
/// Envelope problems (wrong block type, foreign RID, sequence mismatch
/// under `Strict`, wrong echoed command) are reported before the parameter
/// field is looked at.
pub fn decode_response_frame(
    request: &Frame,
    bytes: &[u8],
    policy: SequenceCheck,
) -> Result<Response> {
    let response = check_response_frame(request, bytes, policy)?;
    decode_checked_response(&response)
}

/// Decode the parameter field of a frame that passed `check_response_frame`.
pub fn decode_checked_response(response: &Frame) -> Result<Response> {
    let code = response
        .command_code()
        .ok_or_else(|| ProtocolError::InvalidState("response carries no command code".into()))?;
    Response::decode(code, response.information_field())
}

/// Validate the reader's answer to a resync S-Block.
pub fn decode_resync_response(request: &Frame, bytes: &[u8]) -> Result<Frame> {
    let response = decode_envelope(bytes)?;
    check_block_type(&response, BlockType::Supervisory)?;
    check_resource_id(request, &response)?;
    if !response.information_field().is_empty() {
        return Err(ProtocolError::InvalidFrame(format!(
            "resync reply carries {} information bytes",
            response.information_field().len()
        )));
    }
    Ok(response)
}

/// PCB of an I-Block carrying sequence bit `bit`. Handy for building
/// replies in tests and simulators.
pub fn information_pcb(bit: u8) -> u8 {
    if bit & 1 == 1 { PCB_SEQUENCE_BIT } else { 0 }
}
