use crate::domain::model::EditScore;
use crate::utils::error::{ClientError, Result};
use strsim::levenshtein;

/// 原文與正規化結果之間的編輯距離，以及距離佔原文長度的百分比。
///
/// 百分比先乘 100 再做整數除法（截斷，不四捨五入），長度以字元計。
/// 原文為空時無法定義百分比，回傳 `ClientError::Metric`。
pub fn score(original: &str, normalized: &str) -> Result<EditScore> {
    let length = original.chars().count();
    if length == 0 {
        return Err(ClientError::Metric {
            message: "original text is empty, percentage is undefined".to_string(),
        });
    }

    let distance = levenshtein(original, normalized);
    let percentage = distance.saturating_mul(100) / length;

    Ok(EditScore {
        distance,
        percentage: u32::try_from(percentage).unwrap_or(u32::MAX),
    })
}
