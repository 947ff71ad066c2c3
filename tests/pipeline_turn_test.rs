use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use bridge_core::*;

fn build_pipeline(
    capture: Arc<dyn SpeechCapture>,
    recognizer: Arc<dyn Recognizer>,
    translator: Arc<dyn Translator>,
) -> (ConversationPipeline, UiUpdates) {
    let (ui, updates) = ui_channel();
    let pipeline = ConversationPipelineBuilder::new()
        .capture(capture)
        .recognizer(recognizer)
        .translator(translator)
        .ui(ui)
        .build()
        .expect("builder should succeed");
    (pipeline, updates)
}

/// Turn 结束后把积压的更新全部取出
fn collect(updates: &mut UiUpdates) -> Vec<UiUpdate> {
    let mut out = Vec::new();
    while let Some(update) = updates.try_recv() {
        out.push(update);
    }
    out
}

fn trigger_enables(events: &[UiUpdate], side: SideId) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, UiUpdate::TriggerEnabled { side: s, enabled: true } if *s == side))
        .count()
}

fn appends_to(events: &[UiUpdate], kind: ChannelKind) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            UiUpdate::AppendLine { channel, text } if channel.kind == kind => {
                Some(text.as_str())
            }
            _ => None,
        })
        .collect()
}

fn has_dialog(events: &[UiUpdate]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, UiUpdate::ErrorDialog { .. }))
}

#[tokio::test]
async fn successful_turn_emits_updates_in_pipeline_order() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::new("Tôi có 15 con mèo")),
        Arc::new(TranslatorStub::new()),
    );

    let handle = pipeline
        .run_turn_handle(SideId::Vietnamese)
        .expect("side should be idle");
    handle.await.expect("turn task should not panic");

    let events = collect(&mut updates);
    let expected = vec![
        UiUpdate::TriggerEnabled {
            side: SideId::Vietnamese,
            enabled: false,
        },
        UiUpdate::Status("Listening for Vietnamese speech...".to_string()),
        UiUpdate::Status("Recognizing speech...".to_string()),
        UiUpdate::AppendLine {
            channel: ChannelId::new(SideId::Vietnamese, ChannelKind::Original),
            text: "Tôi có mười lăm (15) con mèo".to_string(),
        },
        UiUpdate::Status("Translating...".to_string()),
        UiUpdate::AppendLine {
            channel: ChannelId::new(SideId::Vietnamese, ChannelKind::Peer),
            text: "[zh-cn] Tôi có mười lăm con mèo".to_string(),
        },
        UiUpdate::AppendLine {
            channel: ChannelId::new(SideId::Vietnamese, ChannelKind::English),
            text: "[en] Tôi có mười lăm con mèo".to_string(),
        },
        UiUpdate::Status("Ready.".to_string()),
        UiUpdate::TriggerEnabled {
            side: SideId::Vietnamese,
            enabled: true,
        },
        UiUpdate::TriggerEnabled {
            side: SideId::Chinese,
            enabled: true,
        },
    ];
    assert_eq!(events, expected);
}

#[tokio::test]
async fn capture_device_failure_shows_dialog_and_restores_triggers() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::failing(CaptureError::DeviceUnavailable(
            "no input device".to_string(),
        ))),
        Arc::new(RecognizerStub::new("unused")),
        Arc::new(TranslatorStub::new()),
    );

    let handle = pipeline.run_turn_handle(SideId::Chinese).unwrap();
    handle.await.unwrap();

    let events = collect(&mut updates);
    assert!(events.contains(&UiUpdate::Status("No microphone found.".to_string())));
    assert!(has_dialog(&events));
    assert!(appends_to(&events, ChannelKind::Original).is_empty());
    assert_eq!(trigger_enables(&events, SideId::Vietnamese), 1);
    assert_eq!(trigger_enables(&events, SideId::Chinese), 1);
}

#[tokio::test]
async fn capture_timeout_is_status_only() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::failing(CaptureError::Timeout)),
        Arc::new(RecognizerStub::new("unused")),
        Arc::new(TranslatorStub::new()),
    );

    pipeline.run_turn_handle(SideId::Vietnamese).unwrap().await.unwrap();

    let events = collect(&mut updates);
    assert!(events.contains(&UiUpdate::Status(
        "Listening timed out. Try again.".to_string()
    )));
    assert!(!has_dialog(&events));
    assert!(appends_to(&events, ChannelKind::Original).is_empty());
    assert_eq!(trigger_enables(&events, SideId::Vietnamese), 1);
    assert_eq!(trigger_enables(&events, SideId::Chinese), 1);
}

#[tokio::test]
async fn unintelligible_audio_is_status_only() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::failing(RecognizeError::Unintelligible)),
        Arc::new(TranslatorStub::new()),
    );

    pipeline.run_turn_handle(SideId::Vietnamese).unwrap().await.unwrap();

    let events = collect(&mut updates);
    assert!(events.contains(&UiUpdate::Status(
        "Could not understand the audio.".to_string()
    )));
    assert!(!has_dialog(&events));
    assert!(appends_to(&events, ChannelKind::Original).is_empty());
    assert_eq!(trigger_enables(&events, SideId::Vietnamese), 1);
}

#[tokio::test]
async fn recognition_service_error_shows_dialog() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::failing(RecognizeError::Service(
            "HTTP 503".to_string(),
        ))),
        Arc::new(TranslatorStub::new()),
    );

    pipeline.run_turn_handle(SideId::Chinese).unwrap().await.unwrap();

    let events = collect(&mut updates);
    assert!(events.contains(&UiUpdate::Status("Speech service error.".to_string())));
    assert!(events.contains(&UiUpdate::ErrorDialog {
        title: "Speech recognition error".to_string(),
        message: "HTTP 503".to_string(),
    }));
    assert!(appends_to(&events, ChannelKind::Original).is_empty());
    assert_eq!(trigger_enables(&events, SideId::Chinese), 1);
}

#[tokio::test]
async fn translation_failure_keeps_original_but_publishes_no_translations() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::new("có 7 người")),
        Arc::new(TranslatorStub::failing(TranslateError(
            "service down".to_string(),
        ))),
    );

    pipeline.run_turn_handle(SideId::Vietnamese).unwrap().await.unwrap();

    let events = collect(&mut updates);
    // 原文通道在翻译之前已发布
    assert_eq!(
        appends_to(&events, ChannelKind::Original),
        vec!["có bảy (7) người"]
    );
    // 翻译通道全部为空
    assert!(appends_to(&events, ChannelKind::Peer).is_empty());
    assert!(appends_to(&events, ChannelKind::English).is_empty());
    assert!(events.contains(&UiUpdate::Status("Translation failed.".to_string())));
    assert!(has_dialog(&events));
    assert_eq!(trigger_enables(&events, SideId::Vietnamese), 1);
    assert_eq!(trigger_enables(&events, SideId::Chinese), 1);
}

/// 只有英文目标失败的翻译器：验证全有或全无策略会丢弃成功的那一路
struct EnglishOnlyFailure;

#[async_trait]
impl Translator for EnglishOnlyFailure {
    async fn translate(
        &self,
        text: &str,
        _src: Locale,
        dst: Locale,
    ) -> Result<String, TranslateError> {
        if dst == Locale::English {
            Err(TranslateError("english target down".to_string()))
        } else {
            Ok(format!("[{}] {}", dst.translation_tag(), text))
        }
    }
}

#[tokio::test]
async fn partial_translation_success_is_discarded() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::new("xin chào")),
        Arc::new(EnglishOnlyFailure),
    );

    pipeline.run_turn_handle(SideId::Vietnamese).unwrap().await.unwrap();

    let events = collect(&mut updates);
    assert!(appends_to(&events, ChannelKind::Peer).is_empty());
    assert!(appends_to(&events, ChannelKind::English).is_empty());
    assert!(events.contains(&UiUpdate::Status("Translation failed.".to_string())));
}

/// 在收到放行信号前一直阻塞的采集器，用于制造活跃 Turn
struct GatedCapture {
    release: Arc<Notify>,
}

#[async_trait]
impl SpeechCapture for GatedCapture {
    async fn listen(
        &self,
        _locale: Locale,
        _config: &ListenConfig,
    ) -> Result<AudioSample, CaptureError> {
        self.release.notified().await;
        Ok(AudioSample {
            data: vec![0; 16],
            sample_rate: 16_000,
        })
    }
}

#[tokio::test]
async fn second_turn_on_same_side_is_rejected_while_active() {
    let release = Arc::new(Notify::new());
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(GatedCapture {
            release: Arc::clone(&release),
        }),
        Arc::new(RecognizerStub::new("你好")),
        Arc::new(TranslatorStub::new()),
    );

    let handle = pipeline
        .run_turn_handle(SideId::Chinese)
        .expect("first turn should start");
    // 同一席位的第二次触发是 no-op
    assert!(!pipeline.run_turn(SideId::Chinese));

    release.notify_one();
    handle.await.unwrap();

    // Turn 结束后席位回到空闲，可以再次触发
    let handle = pipeline
        .run_turn_handle(SideId::Chinese)
        .expect("side should be idle again");
    release.notify_one();
    handle.await.unwrap();

    let events = collect(&mut updates);
    let ready = events
        .iter()
        .filter(|e| matches!(e, UiUpdate::Status(s) if s == "Ready."))
        .count();
    assert_eq!(ready, 2);
}

#[tokio::test]
async fn both_sides_run_concurrently_and_reach_idle() {
    let (pipeline, mut updates) = build_pipeline(
        Arc::new(CaptureStub::new()),
        Arc::new(RecognizerStub::new("25")),
        Arc::new(TranslatorStub::new()),
    );

    let vi = pipeline.run_turn_handle(SideId::Vietnamese).unwrap();
    let zh = pipeline.run_turn_handle(SideId::Chinese).unwrap();
    vi.await.unwrap();
    zh.await.unwrap();

    let events = collect(&mut updates);
    // 两个席位各自发布了原文，互不影响
    assert_eq!(
        appends_to(&events, ChannelKind::Original).len(),
        2,
        "each side publishes its own original line"
    );
    let originals: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            UiUpdate::AppendLine { channel, text } if channel.kind == ChannelKind::Original => {
                Some((channel.side, text.as_str()))
            }
            _ => None,
        })
        .collect();
    assert!(originals.contains(&(SideId::Vietnamese, "hai mươi lăm (25)")));
    assert!(originals.contains(&(SideId::Chinese, "二五 (25)")));

    // 两轮都结束后两个席位都空闲
    assert!(pipeline.run_turn(SideId::Vietnamese));
    assert!(pipeline.run_turn(SideId::Chinese));
}
