use serde::{Deserialize, Serialize};

/// 对话支持的语言（封闭集合）
///
/// English 只作为翻译目标出现，不会成为说话方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    Vietnamese,
    Chinese,
    English,
}

impl Locale {
    /// 识别引擎使用的语言标识
    pub fn recognition_tag(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "vi-VN",
            Locale::Chinese => "zh-CN",
            Locale::English => "en-US",
        }
    }

    /// 翻译引擎使用的语言标识
    pub fn translation_tag(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "vi",
            Locale::Chinese => "zh-cn",
            Locale::English => "en",
        }
    }
}

/// 对话的两个固定席位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideId {
    Vietnamese,
    Chinese,
}

impl SideId {
    pub fn peer(&self) -> SideId {
        match self {
            SideId::Vietnamese => SideId::Chinese,
            SideId::Chinese => SideId::Vietnamese,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            SideId::Vietnamese => 0,
            SideId::Chinese => 1,
        }
    }
}

/// 每个席位的三个显示通道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// 识别出的原文（带数字注释）
    Original,
    /// 对方语言的译文
    Peer,
    /// 英文译文
    English,
}

/// 六个显示通道之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId {
    pub side: SideId,
    pub kind: ChannelKind,
}

impl ChannelId {
    pub fn new(side: SideId, kind: ChannelKind) -> Self {
        Self { side, kind }
    }
}

/// 席位描述：识别/翻译语言与显示标签，构造后不再变化
#[derive(Debug, Clone, Serialize)]
pub struct SideProfile {
    pub id: SideId,
    /// 说话方语言（用于识别与数字本地化）
    pub source: Locale,
    /// 对方语言（第一个翻译目标）
    pub peer: Locale,
    pub label: &'static str,
}

impl SideProfile {
    pub fn vietnamese() -> Self {
        Self {
            id: SideId::Vietnamese,
            source: Locale::Vietnamese,
            peer: Locale::Chinese,
            label: "Vietnamese",
        }
    }

    pub fn chinese() -> Self {
        Self {
            id: SideId::Chinese,
            source: Locale::Chinese,
            peer: Locale::Vietnamese,
            label: "Chinese",
        }
    }

    pub fn for_side(side: SideId) -> Self {
        match side {
            SideId::Vietnamese => Self::vietnamese(),
            SideId::Chinese => Self::chinese(),
        }
    }

    pub fn channel(&self, kind: ChannelKind) -> ChannelId {
        ChannelId::new(self.id, kind)
    }
}

/// 一次采集得到的音频片段（对识别引擎不透明）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSample {
    pub data: Vec<u8>,
    pub sample_rate: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_peer_is_symmetric() {
        assert_eq!(SideId::Vietnamese.peer(), SideId::Chinese);
        assert_eq!(SideId::Chinese.peer(), SideId::Vietnamese);
    }

    #[test]
    fn profiles_carry_original_tags() {
        let vi = SideProfile::vietnamese();
        assert_eq!(vi.source.recognition_tag(), "vi-VN");
        assert_eq!(vi.source.translation_tag(), "vi");
        assert_eq!(vi.peer.translation_tag(), "zh-cn");

        let zh = SideProfile::chinese();
        assert_eq!(zh.source.recognition_tag(), "zh-CN");
        assert_eq!(zh.peer.translation_tag(), "vi");
    }
}
