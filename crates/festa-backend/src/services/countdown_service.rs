use std::time::Duration;

use chrono::{DateTime, Local};
use festa_bridge::MessageFromBackend;
use festa_bridge::countdown::{CountdownRemaining, CountdownState, next_occurrence};
use festa_bridge::notification::NotificationType;
use tokio::task::JoinHandle;

/// Arms the countdown for the next occurrence of the configured birthday.
/// An impossible month/day combination leaves the countdown disarmed and
/// tells the user why.
pub async fn arm_from_config(context: super::AppContextHandle) {
    let (month, day) = {
        let state = context.state.read().await;
        (
            state.config.celebration.birthday_month,
            state.config.celebration.birthday_day,
        )
    };

    match next_occurrence(&Local::now(), month, day) {
        Some(target) => arm(context, target).await,
        None => {
            log::error!("Configured birthday {month:02}-{day:02} is not a real date");
            context
                .send_notification(
                    NotificationType::Error,
                    format!(
                        "The configured birthday {month:02}-{day:02} is not a real calendar date"
                    ),
                )
                .await;
        }
    }
}

/// Handles an explicit request to run the countdown towards `target` (see
/// [`festa_bridge::MessageToBackend::StartCountdown`]).
pub async fn handle_start(context: super::AppContextHandle, target: DateTime<Local>) {
    arm(context, target).await;
}

/// Handles a countdown reset (see
/// [`festa_bridge::MessageToBackend::ResetCountdown`]): disarms the ticker,
/// zeroes the display, and reports the resolved target back. The countdown
/// stays disarmed until a `StartCountdown` re-arms it.
pub async fn handle_reset(context: super::AppContextHandle, target: Option<DateTime<Local>>) {
    {
        let mut state = context.state.write().await;
        if let Some(ticker) = state.countdown.take() {
            ticker.abort();
        }
    }

    let resolved = match target {
        Some(target) => Some(target),
        None => {
            let (month, day) = {
                let state = context.state.read().await;
                (
                    state.config.celebration.birthday_month,
                    state.config.celebration.birthday_day,
                )
            };
            next_occurrence(&Local::now(), month, day)
        }
    };

    match resolved {
        Some(target) => {
            context
                .send(MessageFromBackend::CountdownTick(CountdownState {
                    target,
                    remaining: CountdownRemaining::ZERO,
                    ended: false,
                }))
                .await;
            context
                .send(MessageFromBackend::CountdownReset { target })
                .await;
        }
        None => {
            context
                .send_notification(
                    NotificationType::Error,
                    "The configured birthday is not a real calendar date",
                )
                .await;
        }
    }
}

async fn arm(context: super::AppContextHandle, target: DateTime<Local>) {
    log::info!("Arming the countdown towards {target}");
    let ticker = spawn_ticker(context.clone(), target);
    let mut state = context.state.write().await;
    if let Some(previous) = state.countdown.replace(ticker) {
        previous.abort();
    }
}

/// Ticks once per second until the target passes, then celebrates and stops.
fn spawn_ticker(context: super::AppContextHandle, target: DateTime<Local>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let snapshot = CountdownState::at(&Local::now(), target);
            let ended = snapshot.ended;
            context
                .send(MessageFromBackend::CountdownTick(snapshot))
                .await;
            if ended {
                break;
            }
        }

        let name = {
            let state = context.state.read().await;
            state.config.celebration.celebrant_name.clone()
        };
        context
            .send_notification(
                NotificationType::Celebration,
                format!("It's time! Happy birthday, {name}!"),
            )
            .await;
    })
}
