use crate::error::AppError;
use crate::mvu::score::{Deps, LeaderboardModel, Msg, run_effect, update};

/// Runs the MVU loop for the leaderboard: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the recorded error when the cycle failed and nothing was rendered for it (json mode).
pub async fn run_leaderboard(
    model: &mut LeaderboardModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        let next = update(model, msg);
        effects.extend(next);
    }
    match (&model.error, &model.markup) {
        (Some(e), None) => Err(e.clone()),
        _ => Ok(()),
    }
}
