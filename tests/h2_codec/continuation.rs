//! HEADERS + CONTINUATION sequencing.
//!
//! The codec decodes each frame's header-block fragment independently
//! against the shared HPACK decoder state; it does not buffer a "pending"
//! header block across frames or track which stream a HEADERS without
//! END_HEADERS left open. Reassembly and stream-sequencing are the stream
//! layer's job, demonstrated here by the caller doing it explicitly.

use h2_frame_codec::{CodecConfig, Frame, FrameHeader, HpackDecoder};

fn decode(bytes: &[u8], hpack: &mut HpackDecoder) -> Frame {
    let header = FrameHeader::parse(&bytes[0..9]).unwrap();
    Frame::decode(&header, &bytes[9..], hpack, &CodecConfig::default()).unwrap()
}

#[test]
fn headers_without_end_headers_yields_only_its_own_fragment() {
    let mut hpack = HpackDecoder::new();
    let mut data = vec![0, 0, 3, 1, 0, 0, 0, 0, 1];
    data.extend_from_slice(&[0x82, 0x86, 0x84]);
    match decode(&data, &mut hpack) {
        Frame::Headers(f) => {
            assert!(!f.flags.contains(h2_frame_codec::flags::HeadersFlags::END_HEADERS));
            assert_eq!(f.header_block, vec![0x82, 0x86, 0x84]);
            assert_eq!(f.headers.len(), 3);
        }
        other => panic!("expected Headers, got {:?}", other),
    }
}

#[test]
fn continuation_decodes_against_the_same_running_hpack_state() {
    // The HEADERS fragment above references indexed entries; a CONTINUATION
    // that follows must decode against the *same* HpackDecoder instance to
    // see consistent dynamic-table state, which is exactly what the caller
    // is responsible for threading through.
    let mut hpack = HpackDecoder::new();
    let mut headers_frame = vec![0, 0, 2, 1, 0, 0, 0, 0, 3];
    headers_frame.extend_from_slice(&[0x82, 0x86]);
    let first = decode(&headers_frame, &mut hpack);
    let first_block = match first {
        Frame::Headers(f) => f.header_block,
        _ => panic!("expected Headers"),
    };

    let mut cont_frame = vec![0, 0, 1, 9, 4, 0, 0, 0, 3];
    cont_frame.extend_from_slice(&[0x84]);
    let second = decode(&cont_frame, &mut hpack);
    let (flags, cont_block) = match second {
        Frame::Continuation(f) => (f.flags, f.header_block),
        other => panic!("expected Continuation, got {:?}", other),
    };
    assert!(flags.contains(h2_frame_codec::flags::ContinuationFlags::END_HEADERS));

    // Reassembly is the caller's job: concatenating the raw fragments
    // reproduces the logical header block.
    let mut full_block = first_block;
    full_block.extend_from_slice(&cont_block);
    assert_eq!(full_block, vec![0x82, 0x86, 0x84]);
}

#[test]
fn continuation_on_a_different_stream_is_not_rejected_by_the_codec() {
    // No cross-frame stream bookkeeping exists in this codec: a
    // CONTINUATION naming a stream that never saw an open HEADERS decodes
    // just fine on its own. Catching the mismatch is the stream layer's job.
    let mut hpack = HpackDecoder::new();
    let mut cont_frame = vec![0, 0, 1, 9, 4, 0, 0, 0, 3];
    cont_frame.extend_from_slice(&[0x82]);
    match decode(&cont_frame, &mut hpack) {
        Frame::Continuation(f) => assert_eq!(f.stream_id, 3),
        other => panic!("expected Continuation, got {:?}", other),
    }
}

#[test]
fn continuation_header_block_too_large_is_rejected_independently() {
    let mut hpack = HpackDecoder::new();
    let big_block = vec![0x82u8; 300 * 1024];
    let len = big_block.len() as u32;
    let mut data = vec![
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
        9, // CONTINUATION
        0x4,
        0, 0, 0, 1,
    ];
    data.extend_from_slice(&big_block);
    let header = FrameHeader::parse(&data[0..9]).unwrap();
    let result = Frame::decode(&header, &data[9..], &mut hpack, &CodecConfig::default());
    assert!(matches!(result, Err(h2_frame_codec::Error::HeaderBlockTooLarge { .. })));
}

#[test]
fn headers_initial_block_within_limit_decodes() {
    let mut hpack = HpackDecoder::new();
    let block = vec![0x82u8; 100];
    let len = block.len() as u32;
    let mut data = vec![
        (len >> 16) as u8,
        (len >> 8) as u8,
        len as u8,
        1, // HEADERS
        0,
        0, 0, 0, 1,
    ];
    data.extend_from_slice(&block);
    let header = FrameHeader::parse(&data[0..9]).unwrap();
    let frame = Frame::decode(&header, &data[9..], &mut hpack, &CodecConfig::default()).unwrap();
    assert!(matches!(frame, Frame::Headers(_)));
}
