//! End-to-end checks across the timeline, gaze and subtitle engines.

use vedit_engine::gaze::{self, correct_sequence, heatmap_counts, DEFAULT_HEATMAP_GRID_SIZE};
use vedit_engine::subtitles::{export_subtitles, pack_segments, SubtitleFormat, SubtitleOptions};
use vedit_engine::timeline::{
    auto_arrange, detect_collisions, export_timeline, split, timeline_duration, validate,
    ClipBuilder, TimelineExportFormat,
};
use vedit_models::{
    Clip, ClipId, ClipType, EyeTrackingFrame, GazeConfig, TranscriptionSegment, Vec3, WordTiming,
};

fn video_clip(id: &str, track: u32, start: f64, end: f64) -> Clip {
    ClipBuilder::new(ClipType::Video, start, end)
        .id(ClipId::from(id))
        .track_index(track)
        .source(format!("asset-{id}"))
        .build()
        .unwrap()
}

fn tracking_frame(timestamp: f64, gaze: Vec3, confidence: f64) -> EyeTrackingFrame {
    EyeTrackingFrame {
        timestamp,
        frame_number: (timestamp * 30.0) as u64,
        left_eye: Vec3::new(-0.03, 0.0, 0.0),
        right_eye: Vec3::new(0.03, 0.0, 0.0),
        gaze_direction: gaze,
        confidence,
        head_pose: None,
    }
}

#[test]
fn test_overlapping_clips_collide_then_arrange_resolves() {
    let a = video_clip("a", 0, 0.0, 10.0);
    let b = video_clip("b", 0, 5.0, 15.0);
    let clips = vec![a, b];

    let collisions = detect_collisions(&clips);
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].overlap_start, 5.0);
    assert_eq!(collisions[0].overlap_end, 10.0);
    assert_eq!(collisions[0].overlap_duration(), 5.0);

    let arranged = auto_arrange(&clips);
    assert_eq!(arranged[0].start_time, 0.0);
    assert_eq!(arranged[0].end_time, 10.0);
    assert_eq!(arranged[1].start_time, 10.0);
    assert_eq!(arranged[1].end_time, 20.0);
    assert!(detect_collisions(&arranged).is_empty());
    assert_eq!(timeline_duration(&arranged), 20.0);

    // A second pass changes nothing
    assert_eq!(auto_arrange(&arranged), arranged);
}

#[test]
fn test_split_partitions_the_original_interval() {
    let clip = video_clip("a", 0, 2.0, 12.0);
    let (first, second) = split(&clip, 7.0).unwrap();

    assert_eq!(first.id, clip.id);
    assert_ne!(second.id, clip.id);
    assert_eq!(first.start_time, 2.0);
    assert_eq!(first.end_time, 7.0);
    assert_eq!(second.start_time, 7.0);
    assert_eq!(second.end_time, 12.0);
    assert_eq!(first.duration + second.duration, clip.duration);
    assert!(!first.overlaps(&second));
}

#[test]
fn test_arranged_timeline_validates_and_exports() {
    let clips = auto_arrange(&[
        video_clip("a", 0, 0.0, 10.0),
        video_clip("b", 0, 5.0, 15.0),
    ]);

    let report = validate(&clips);
    assert!(report.valid, "unexpected errors: {:?}", report.errors);

    let script = export_timeline(&clips, TimelineExportFormat::Ffmpeg).unwrap();
    assert!(script.contains("trim=start=10:end=20"));

    let json = export_timeline(&clips, TimelineExportFormat::Json).unwrap();
    assert!(json.contains("\"duration\": 20.0"));
}

#[test]
fn test_zero_strength_correction_is_identity() {
    let frames = vec![
        tracking_frame(0.0, Vec3::new(0.4, -0.2, 0.9), 0.9),
        tracking_frame(0.1, Vec3::new(0.3, 0.1, 0.95), 0.8),
    ];
    let config = GazeConfig {
        correction_strength: 0.0,
        ..GazeConfig::default()
    };
    assert_eq!(correct_sequence(&frames, &config), frames);
}

#[test]
fn test_full_strength_no_smoothing_hits_target() {
    let frames = vec![tracking_frame(0.0, Vec3::new(0.5, 0.5, 0.5), 0.9)];
    let config = GazeConfig {
        target_position: Vec3::new(0.0, 0.0, 2.0),
        correction_strength: 1.0,
        smoothing: 0.0,
        ..GazeConfig::default()
    };

    let corrected = correct_sequence(&frames, &config);
    let gaze = corrected[0].gaze_direction;
    assert!(gaze.x.abs() < 1e-12);
    assert!(gaze.y.abs() < 1e-12);
    assert!((gaze.magnitude() - 1.0).abs() < 1e-12);
}

#[test]
fn test_gaze_analysis_heatmap_is_normalized() {
    let frames: Vec<EyeTrackingFrame> = (0..20)
        .map(|i| {
            let t = i as f64 / 30.0;
            let confidence = if i == 7 { 0.1 } else { 0.9 };
            tracking_frame(t, Vec3::new(0.02 * i as f64, 0.0, 1.0), confidence)
        })
        .collect();

    let analysis = gaze::analyze(&frames, &GazeConfig::default());

    assert_eq!(analysis.blink_intervals.len(), 1);
    assert_eq!(analysis.heatmap.len(), DEFAULT_HEATMAP_GRID_SIZE);
    for row in &analysis.heatmap {
        for &cell in row {
            assert!((0.0..=1.0).contains(&cell));
        }
    }

    let counts = heatmap_counts(&analysis.corrected_frames, DEFAULT_HEATMAP_GRID_SIZE);
    let binned: u32 = counts.iter().flat_map(|r| r.iter()).sum();
    assert!(binned as usize <= frames.len());
}

#[test]
fn test_transcript_to_srt_pipeline() {
    let segment = TranscriptionSegment {
        id: 1,
        text: "Hello welcome to the video".to_string(),
        start: 0.0,
        end: 2.0,
        words: Some(vec![
            WordTiming::new("Hello", 0.0, 0.5),
            WordTiming::new("welcome", 0.6, 1.0),
            WordTiming::new("to", 1.05, 1.15),
            WordTiming::new("the", 1.2, 1.3),
            WordTiming::new("video", 1.35, 2.0),
        ]),
    };
    let options = SubtitleOptions {
        max_chars_per_line: 13,
        max_duration: 5.0,
    };

    let entries = pack_segments(&[segment], &options);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Hello welcome");
    assert_eq!(entries[1].text, "to the video");

    let srt = export_subtitles(&entries, SubtitleFormat::Srt).unwrap();
    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:01,000\nHello welcome\n\n\
         2\n00:00:01,050 --> 00:00:02,000\nto the video\n\n"
    );

    let vtt = export_subtitles(&entries, SubtitleFormat::Vtt).unwrap();
    assert!(vtt.starts_with("WEBVTT\n\n"));
    assert!(vtt.contains("00:00:01.050 --> 00:00:02.000"));
}
