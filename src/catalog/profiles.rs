use super::{CurvatureLevel, MatchNail, ProfileCode, ProfileRecord, ProfileStats, ProfileTheme};

const TEXT: &str = "#FFFFFF";
const CARD: &str = "rgba(255,255,255,0.1)";

/// Durability profile cards, in [`ProfileCode`] order
pub static PROFILES: [ProfileRecord; 3] = [
    ProfileRecord {
        id: ProfileCode::DA,
        type_name: "IRON",
        name: "뚝심있는 승부사",
        sub_title: "흔들리지 않는 단단한 내면",
        tags: &["#리더십", "#강인함", "#책임감"],
        description: "최고의 멘탈을 가진 사파군입니다. 확고한 철학을 가진 리더형입니다. 한번 정한 목표는 끝까지 지켜내는 의리와 책임감이 돋보이며, 위기 상황에서 더욱 냉철한 판단력을 발휘합니다. 내면의 압력을 견디는 힘이 강해 주변에 신뢰감을 줍니다.\n\n굽히지 않는 당신의 신념처럼 손톱의 굴곡(C커브)도 깊고 확실하군요. 평평하거나 딱딱한 플라스틱 팁은 당신의 높은 손톱 아치에 맞지 않아 쉽게 들뜨거나 통증을 유발할 수 있습니다.",
        solution: "깊은 굴곡까지 유연하게 늘어나 빈틈없이 밀착되는 '고밀착 젤네일 스티커'가 정답입니다. 당신의 강인한 손톱을 부드럽게 감싸주어, 어떤 상황에서도 흔들리지 않는 완벽한 지속력을 선사합니다.",
        curvature_level: CurvatureLevel::High,
        stats: ProfileStats {
            hardness: 95,
            flexibility: 30,
            gloss: 85,
        },
        main_img: "/images/nbti/ironType.png",
        result_img: "/images/nbti/D_A_result.jpg",
        match_nails: &[
            MatchNail { name: "모카글레이즈드", img: "/images/nbti/nail_P4_1.png" },
            MatchNail { name: "스모크마그넷", img: "/images/nbti/nail_P5_2.png" },
        ],
        colors: ProfileTheme {
            bg: "#C94044",
            text: TEXT,
            accent: "#FF6B35",
            card: CARD,
        },
    },
    ProfileRecord {
        id: ProfileCode::DB,
        type_name: "BALANCE",
        name: "유연한 지성의 마에스트로",
        sub_title: "빈틈없는 현실주의자",
        tags: &["#자기관리", "#균형감각", "#합리성"],
        description: "어느 한쪽으로 치우치지 않고 중심을 잡는 탁월한 균형 감각을 가졌습니다. 이상을 꿈꾸되 현실적인 계획을 세울 줄 알며, 남들이 놓치는 미세한 디테일을 감지하는 섬세함으로 상황을 유연하게 조율합니다.\n\n이러한 당신의 성향처럼, 손톱 또한 가장 이상적인 표준 곡률을 가졌습니다. 어떤 네일도 잘 어울리지만, 철두철미한 당신은 비효율적인 시간 낭비를 싫어하죠.",
        solution: "샵에 가는 번거로움 없이도 프로급 퀄리티를 내는 '프리미엄 네일 스티커'가 최고의 파트너입니다. 완벽한 규격으로 디자인되어 붙이기만 하면 끝나는 간편함은, 바쁜 일상 속에서도 균형을 잃지 않는 당신의 자기관리 철학과 딱 맞아떨어집니다.",
        curvature_level: CurvatureLevel::Mid,
        stats: ProfileStats {
            hardness: 80,
            flexibility: 80,
            gloss: 60,
        },
        main_img: "/images/nbti/balType.png",
        result_img: "/images/nbti/D_B_result.jpg",
        match_nails: &[
            MatchNail { name: "프로스트블루", img: "/images/nbti/nail_P2_1.png" },
            MatchNail { name: "토피아가일", img: "/images/nbti/nail_P6_1.png" },
        ],
        colors: ProfileTheme {
            bg: "#4A9A44",
            text: TEXT,
            accent: "#4CAF50",
            card: CARD,
        },
    },
    ProfileRecord {
        id: ProfileCode::DC,
        type_name: "GLASS",
        name: "투명한 감성의 아티스트",
        sub_title: "세상의 빛을 그대로 투영하는 순수한 영혼",
        tags: &["#직관력", "#공감능력", "#솔직함"],
        description: "가식 없이 투명한 매력의 소유자입니다. 타인의 감정을 있는 그대로 비추는 공감 능력과 논리보다 앞서는 뛰어난 직관력을 지녔습니다. 변화에 유연하고 회복 탄력성이 좋아 쿨한 성격입니다.\n\n순수한 당신의 영혼처럼 손톱 또한 평평하고 매끈한 형태를 지녔군요. 굴곡이 적은 손톱은 두꺼운 팁이나 경화형 젤을 올렸을 때 조이는 압박감을 받아 답답해하기 쉽습니다.",
        solution: "이물감 없이 내 손톱처럼 얇게 밀착되는 '퍼펙트핏 네일 스티커'가 필요합니다. 억지로 모양을 잡을 필요 없이 평평한 손톱 위에 가볍게 안착하며, 당신이 언제든 새로운 감성을 표현할 수 있도록 교체 또한 자유롭습니다.",
        curvature_level: CurvatureLevel::Low,
        stats: ProfileStats {
            hardness: 30,
            flexibility: 95,
            gloss: 90,
        },
        main_img: "/images/nbti/glassType.png",
        result_img: "/images/nbti/D_C_result.jpg",
        match_nails: &[
            MatchNail { name: "스노우치크", img: "/images/nbti/nail_P5_1.png" },
            MatchNail { name: "드리밍퍼플도트", img: "/images/nbti/nail_P1_2.png" },
        ],
        colors: ProfileTheme {
            bg: "#AEBAF3",
            text: TEXT,
            accent: "#CE93D8",
            card: CARD,
        },
    },
];
