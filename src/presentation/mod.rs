/// プレゼンテーション層モジュール
///
/// # モジュール
/// - `input`: ユーザー入力処理
/// - `output`: コマンド結果とエラーの出力（人間向け・機械向け）

pub mod input;
pub mod output;
