//! Malformed-frame tests: each maps to a specific `Error` variant rather
//! than a generic failure.

use h2_frame_codec::{CodecConfig, Error, Frame, FrameHeader, HpackDecoder};

fn decode(bytes: &[u8]) -> Result<Frame, Error> {
    let header = FrameHeader::parse(&bytes[0..9]).unwrap();
    Frame::decode(&header, &bytes[9..], &mut HpackDecoder::new(), &CodecConfig::default())
}

#[test]
fn window_update_wrong_length_is_frame_size_error() {
    let frame = vec![0, 0, 2, 8, 0, 0, 0, 0, 1, 0, 0];
    assert!(matches!(decode(&frame), Err(Error::FrameSizeError(_))));
}

#[test]
fn ping_wrong_length_is_frame_size_error() {
    let frame = vec![0, 0, 4, 6, 0, 0, 0, 0, 0, 1, 2, 3, 4];
    assert!(matches!(decode(&frame), Err(Error::FrameSizeError(_))));
}

#[test]
fn goaway_too_short_is_frame_size_error() {
    let frame = vec![0, 0, 4, 7, 0, 0, 0, 0, 0, 0, 0, 0, 5];
    assert!(matches!(decode(&frame), Err(Error::FrameSizeError(_))));
}

#[test]
fn rst_stream_wrong_length_is_frame_size_error() {
    let frame = vec![0, 0, 2, 3, 0, 0, 0, 0, 1, 0, 0];
    assert!(matches!(decode(&frame), Err(Error::FrameSizeError(_))));
}

#[test]
fn padded_data_frame_with_excessive_padding_is_malformed_padding() {
    let mut frame = vec![0, 0, 6, 0, 0x8, 0, 0, 0, 1];
    frame.push(10); // pad_length 10 > 5 remaining bytes
    frame.extend_from_slice(b"hello");
    assert!(matches!(decode(&frame), Err(Error::MalformedPadding { .. })));
}

#[test]
fn headers_with_priority_flag_extracts_only_header_block() {
    let mut frame = vec![0, 0, 7, 1, 0x24, 0, 0, 0, 1];
    frame.extend_from_slice(&[0, 0, 0, 0]); // stream dependency
    frame.push(255); // weight
    frame.extend_from_slice(&[0x82, 0x86]); // header block
    match decode(&frame).unwrap() {
        Frame::Headers(f) => assert_eq!(f.header_block, vec![0x82, 0x86]),
        other => panic!("expected Headers, got {:?}", other),
    }
}

#[test]
fn headers_block_exceeding_configured_limit_is_header_block_too_large() {
    let big_block = vec![0x82u8; 300 * 1024];
    let len = big_block.len() as u32;
    let mut data = vec![
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
        1, // HEADERS
        0,
        0, 0, 0, 1,
    ];
    data.extend_from_slice(&big_block);
    let header = FrameHeader::parse(&data[0..9]).unwrap();
    let result = Frame::decode(
        &header,
        &data[9..],
        &mut HpackDecoder::new(),
        &CodecConfig::default(),
    );
    assert!(matches!(result, Err(Error::HeaderBlockTooLarge { .. })));
}

#[test]
fn truncated_header_bytes_is_malformed_header() {
    let short = [0u8; 4];
    assert!(matches!(FrameHeader::parse(&short), Err(Error::MalformedHeader)));
}

#[test]
fn error_header_is_populated_for_protocol_error() {
    let frame = vec![0, 0, 4, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0]; // WINDOW_UPDATE increment 0
    let err = decode(&frame).unwrap_err();
    assert!(err.header().is_some());
    assert!(err.is_fatal());
}

#[test]
fn unknown_type_is_non_fatal() {
    let header = FrameHeader {
        length: 3,
        frame_type: 0xFF,
        flags: 0,
        reserved: false,
        stream_id: 1,
    };
    let err = Frame::decode(&header, &[1, 2, 3], &mut HpackDecoder::new(), &CodecConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnknownType { .. }));
    assert!(!err.is_fatal());
}
