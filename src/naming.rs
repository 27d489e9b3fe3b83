// ファイル名の組み立て

use crate::config::{NamingConfig, PrefixMode};
use std::ffi::{OsStr, OsString};

/// 連番付きの新しいファイル名を作る
pub struct NameFormatter;

impl NameFormatter {
    /// `n` を `digits` 桁にゼロ埋めする（桁数を超える場合は切り詰めない）
    pub fn pad_number(n: u64, digits: usize) -> String {
        format!("{n:0digits$}")
    }

    /// 10進数での桁数
    pub fn decimal_width(n: u64) -> usize {
        n.to_string().len()
    }

    /// 新しいファイル名を作る
    ///
    /// 置換モードでは既存の番号を探さず、先頭から `番号 + 区切り文字` の文字数分を
    /// そのまま上書きする。プレフィックスの方が長い場合は元の名前は全て失われる。
    pub fn format(
        base_name: &str,
        n: u64,
        digits: usize,
        separator: &str,
        prefix_mode: PrefixMode,
    ) -> String {
        let number = Self::pad_number(n, digits);

        match prefix_mode {
            PrefixMode::InsertNew => format!("{number}{separator}{base_name}"),
            PrefixMode::ReplaceExisting => {
                let prefix = format!("{number}{separator}");
                let prefix_len = prefix.chars().count();

                if prefix_len < base_name.chars().count() {
                    let rest: String = base_name.chars().skip(prefix_len).collect();
                    prefix + &rest
                } else {
                    prefix
                }
            }
        }
    }

    pub fn format_with(base_name: &str, n: u64, config: &NamingConfig) -> String {
        Self::format(
            base_name,
            n,
            config.digits,
            &config.separator,
            config.prefix_mode,
        )
    }

    /// 元のファイル名を OS のバイト列のまま使って新しい名前を作る
    ///
    /// 挿入モードでは UTF-8 でない名前もそのまま後ろに連結する。置換モードは文字単位で
    /// 上書きするため、UTF-8 でない名前には適用できず `None` を返す。
    pub fn format_os(base_name: &OsStr, n: u64, config: &NamingConfig) -> Option<OsString> {
        if let Some(name) = base_name.to_str() {
            return Some(Self::format_with(name, n, config).into());
        }

        match config.prefix_mode {
            PrefixMode::InsertNew => {
                let mut name = OsString::from(Self::pad_number(n, config.digits));
                name.push(&config.separator);
                name.push(base_name);
                Some(name)
            }
            PrefixMode::ReplaceExisting => None,
        }
    }

    /// `format_os` で名前を作れるか
    pub fn can_format(base_name: &OsStr, prefix_mode: PrefixMode) -> bool {
        prefix_mode == PrefixMode::InsertNew || base_name.to_str().is_some()
    }
}
