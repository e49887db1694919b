//! 解析セッション
//!
//! Idle → InFlight → Idle の2状態。解析中の再送信は受け付けない（キューしない）。
//! 直近の結果またはエラーメッセージを保持する。

use crate::analyzer::{AnalysisClient, Classifier};
use crate::error::{Result, ScamScanError, GENERIC_FAILURE_MESSAGE};
use scam_scan_common::{AnalysisResult, Error as CommonError, InputCollector};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InFlight,
}

/// 画面に出す一時状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionView {
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

pub struct Session<C> {
    client: AnalysisClient<C>,
    in_flight: AtomicBool,
    view: Mutex<SessionView>,
}

/// ドロップ時に InFlight を解除
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<C: Classifier> Session<C> {
    pub fn new(client: AnalysisClient<C>) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
            view: Mutex::new(SessionView::default()),
        }
    }

    pub fn client(&self) -> &AnalysisClient<C> {
        &self.client
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.load(Ordering::SeqCst) {
            Phase::InFlight
        } else {
            Phase::Idle
        }
    }

    pub async fn view(&self) -> SessionView {
        self.view.lock().await.clone()
    }

    /// 結果とエラーを消す（「別の内容を解析」）
    pub async fn reset(&self) {
        *self.view.lock().await = SessionView::default();
    }

    /// 入力を送信して解析を1回実行
    ///
    /// - 送信できない入力: `InvalidInput`（呼び出しなし）
    /// - 解析中: `Busy`（呼び出しなし）
    /// - それ以外: 前回の結果/エラーを消してから解析し、結果かエラーを保持
    pub async fn submit(&self, input: &InputCollector) -> Result<AnalysisResult> {
        if !input.can_submit() {
            return Err(CommonError::InvalidInput.into());
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("submission ignored: analysis already in flight");
            return Err(ScamScanError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        *self.view.lock().await = SessionView::default();

        let outcome = match input.build_request() {
            Ok(request) => self.client.analyze(&request).await,
            Err(e) => Err(e.into()),
        };

        let mut view = self.view.lock().await;
        match &outcome {
            Ok(result) => view.result = Some(result.clone()),
            Err(e) => {
                tracing::debug!(error = %e, "analysis failed");
                view.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        }

        outcome
    }
}
