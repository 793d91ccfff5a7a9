use serde::{Deserialize, Serialize};
use std::fmt;

/// グラフ内のユーザーを指す安定ハンドル
///
/// アリーナは縮小しないため、同じグラフに対しては発行後ずっと有効。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(usize);

impl UserId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}
