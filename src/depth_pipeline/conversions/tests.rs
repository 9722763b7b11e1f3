use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::depth_pipeline::common::constants::{FRAME_BYTES, PACKED_FRAME_BYTES, SENTINEL_CODE};
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::conversions::{
    DepthFrameReader, DepthToRasterPipeline, InputFormat, PipelineTimings, RasterWriter,
    RawRasterWriter, RenderConfig, StandardFrameReader,
};
use crate::depth_pipeline::frame::DepthFrame;
use crate::depth_pipeline::lut::DepthLut;
use crate::depth_pipeline::projection::{OutputRaster, View};
use crate::depth_pipeline::unpack::pack_stream;

const MOCK_FRAME_LEN: usize = 16;

struct MockReader {
    should_fail: bool,
    frame: Option<DepthFrame>,
}

impl DepthFrameReader for MockReader {
    fn frame_len(&self) -> usize {
        MOCK_FRAME_LEN
    }

    fn read_frame(&self, _data: &[u8]) -> Result<DepthFrame> {
        if self.should_fail {
            return Err(DepthError::InputReadError("Mock decode error".to_string()));
        }
        Ok(self.frame.clone().unwrap_or_else(|| DepthFrame::filled(0)))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<View>>>,
}

impl RasterWriter for MockWriter {
    fn write_raster(&self, raster: &OutputRaster, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(DepthError::OutputWriteError("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(raster.view());
        Ok(())
    }
}

fn mock_pipeline<'a>(
    lut: &'a DepthLut,
    reader_fails: bool,
    writer_fails: bool,
    config: RenderConfig,
) -> (
    DepthToRasterPipeline<'a, MockReader, MockWriter>,
    Arc<Mutex<Vec<View>>>,
) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: reader_fails,
        frame: None,
    };
    let writer = MockWriter {
        should_fail: writer_fails,
        written: written.clone(),
    };
    (
        DepthToRasterPipeline::with_custom(reader, writer, lut, config),
        written,
    )
}

#[test]
fn test_config_builder() {
    let config = RenderConfig::builder()
        .view(View::Side)
        .view(View::Front)
        .input_format(InputFormat::Packed)
        .strict_size(true)
        .parallel(false)
        .build();

    assert_eq!(config.views, vec![View::Side, View::Front]);
    assert_eq!(config.input_format, InputFormat::Packed);
    assert!(config.strict_size);
    assert!(!config.parallel);
}

#[test]
fn test_config_defaults() {
    let config = RenderConfig::builder().build();

    assert_eq!(config.views, View::ALL.to_vec());
    assert_eq!(config.input_format, InputFormat::Unpacked);
    assert!(!config.strict_size);
    assert!(config.parallel);
}

#[test]
fn test_successful_conversion_writes_views_in_order() {
    let lut = DepthLut::new();
    let config = RenderConfig::builder()
        .views([View::Front, View::Overhead])
        .build();
    let (pipeline, written) = mock_pipeline(&lut, false, false, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[0u8; MOCK_FRAME_LEN], &mut output);

    assert!(result.is_ok());
    assert_eq!(*written.lock().unwrap(), vec![View::Front, View::Overhead]);
}

#[test]
fn test_reader_failure() {
    let lut = DepthLut::new();
    let (pipeline, written) = mock_pipeline(&lut, true, false, RenderConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[0u8; MOCK_FRAME_LEN], &mut output);

    assert!(matches!(result.unwrap_err(), DepthError::InputReadError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let lut = DepthLut::new();
    let (pipeline, _) = mock_pipeline(&lut, false, true, RenderConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[0u8; MOCK_FRAME_LEN], &mut output);

    assert!(matches!(result.unwrap_err(), DepthError::OutputWriteError(_)));
}

#[test]
fn test_short_input_rejected_before_decoding() {
    let lut = DepthLut::new();
    let (pipeline, written) = mock_pipeline(&lut, false, false, RenderConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(&[0u8; MOCK_FRAME_LEN - 1], &mut output);

    assert!(matches!(
        result.unwrap_err(),
        DepthError::InputTooShort {
            expected: MOCK_FRAME_LEN,
            ..
        }
    ));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_long_input_strict_and_lenient() {
    let lut = DepthLut::new();
    let input = [0u8; MOCK_FRAME_LEN + 4];

    let strict = RenderConfig::builder().strict_size(true).build();
    let (pipeline, _) = mock_pipeline(&lut, false, false, strict);
    let result = pipeline.convert(&input, &mut Cursor::new(Vec::new()));
    assert!(matches!(result.unwrap_err(), DepthError::UnexpectedSize { .. }));

    let (pipeline, written) = mock_pipeline(&lut, false, false, RenderConfig::default());
    assert!(pipeline.convert(&input, &mut Cursor::new(Vec::new())).is_ok());
    assert_eq!(written.lock().unwrap().len(), 4);
}

#[test]
fn test_standard_pipeline_raw_output_size() {
    let pipeline = DepthToRasterPipeline::new(RenderConfig::default());
    let input = DepthFrame::filled(0).to_le_bytes();

    let mut output = Vec::new();
    pipeline.convert(&input, &mut output).unwrap();

    let expected: usize = View::ALL.iter().map(|v| v.byte_len()).sum();
    assert_eq!(output.len(), expected);
    // Linear view of an all-sentinel frame is black, as are the others
    assert!(output.iter().all(|&b| b == 0));
}

#[test]
fn test_packed_input_matches_unpacked() {
    let codes: Vec<u16> = (0..640 * 480).map(|i| (i % 1100) as u16).collect();
    let packed = pack_stream(&codes);
    assert_eq!(packed.len(), PACKED_FRAME_BYTES);
    let unpacked = DepthFrame::from_codes(&codes).unwrap().to_le_bytes();

    let packed_pipeline = DepthToRasterPipeline::new(
        RenderConfig::builder()
            .input_format(InputFormat::Packed)
            .build(),
    );
    let unpacked_pipeline = DepthToRasterPipeline::new(RenderConfig::default());

    assert_eq!(
        packed_pipeline.render(&packed).unwrap(),
        unpacked_pipeline.render(&unpacked).unwrap()
    );
}

#[test]
fn test_reader_formats() {
    assert_eq!(StandardFrameReader::new(InputFormat::Unpacked).frame_len(), FRAME_BYTES);
    assert_eq!(StandardFrameReader::new(InputFormat::Packed).frame_len(), PACKED_FRAME_BYTES);

    let codes = vec![SENTINEL_CODE; 640 * 480];
    let frame = StandardFrameReader::new(InputFormat::Packed)
        .read_frame(&pack_stream(&codes))
        .unwrap();
    assert_eq!(frame, DepthFrame::from_codes(&codes).unwrap());
}

#[test]
fn test_convert_with_timings_records_stages() {
    let lut = DepthLut::new();
    let (pipeline, _) = mock_pipeline(&lut, false, false, RenderConfig::default());

    let timings = pipeline
        .convert_with_timings(&[0u8; MOCK_FRAME_LEN], &mut Cursor::new(Vec::new()))
        .unwrap();

    let names: Vec<&str> = timings.steps().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["validate_input", "decode_frame", "render_views", "write_rasters"]
    );
    assert!(timings.get_step("render_views").is_some());
    assert!(timings.get_step("missing").is_none());
}

#[test]
fn test_timings_sum_repeated_steps() {
    use std::time::Duration;

    let mut timings = PipelineTimings::new();
    timings.add_step("a", Duration::from_millis(2));
    timings.add_step("b", Duration::from_millis(3));
    timings.add_step("a", Duration::from_millis(5));

    assert_eq!(timings.get_step("a"), Some(Duration::from_millis(7)));
    assert_eq!(timings.total_duration(), Duration::from_millis(10));
    assert_eq!(timings.steps().len(), 3);
}

#[test]
fn test_convert_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("depth.raw");
    let output_path = dir.path().join("overhead.gray");

    let lut = DepthLut::new();
    let mut frame = DepthFrame::from_codes(&vec![SENTINEL_CODE; 640 * 480]).unwrap();
    frame.set_code(320, 240, lut.reverse(3500));
    std::fs::write(&input_path, frame.to_le_bytes()).unwrap();

    let pipeline = DepthToRasterPipeline::with_custom(
        StandardFrameReader::new(InputFormat::Unpacked),
        RawRasterWriter,
        &lut,
        RenderConfig::builder().views([View::Overhead]).build(),
    );
    pipeline.convert_file(&input_path, &output_path).unwrap();

    let written = std::fs::read(&output_path).unwrap();
    assert_eq!(written.len(), View::Overhead.byte_len());
    assert_eq!(written[248 * 500 + 250], 2);
    assert_eq!(written.iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn test_convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = DepthToRasterPipeline::new(RenderConfig::default());

    let result = pipeline.convert_file(dir.path().join("nope.raw"), dir.path().join("out.gray"));
    assert!(matches!(result.unwrap_err(), DepthError::InputReadError(_)));
}
