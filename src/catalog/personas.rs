use super::{EmotionalTendency, MatchNail, PersonaCode, PersonaRecord, PersonaTheme};

const DOME: &str = "rgba(255,255,255,0.2)";

/// Persona cards, in [`PersonaCode`] order
pub static PERSONAS: [PersonaRecord; 6] = [
    PersonaRecord {
        id: PersonaCode::P1,
        name: "우아한 뮤즈",
        sub_title: "섬세한 감각의 낭만파",
        tags: &["#감수성폭발", "#디테일장인"],
        description: "감수성이 풍부하고 미적 감각이 뛰어난 당신!\n투박하고 거친 것은 딱 질색이고, 무엇보다 '분위기'를 중요하게 생각하는군요. 논리적인 설명보다 가슴을 울리는 이야기나 매력적인 향기가 당신을 움직입니다.\n\n당신에게 세상은 하나의 거대한 예술 작품과 같아요. 남들이 \"그냥 물건\"이라고 할 때, 당신은 그 물건이 놓일 공간의 조명과 공기까지 상상하는 디테일 장인입니다.",
        main_img: "/images/nbti/P1_icn.png",
        shape_img: "/images/nbti/P1_shape.png",
        result_img: "/images/nbti/P1_result.jpg",
        match_nails: &[
            MatchNail { name: "코지로지", img: "/images/nbti/nail_P1_1.png" },
            MatchNail { name: "드리밍퍼플", img: "/images/nbti/nail_P1_2.png" },
        ],
        is_emotional: EmotionalTendency::Emotional,
        is_slim: true,
        colors: PersonaTheme {
            bg: "#BF9495",
            text: "#5D423D",
            dome: DOME,
            card: "rgba(255,255,255,0.25)",
        },
    },
    PersonaRecord {
        id: PersonaCode::P2,
        name: "꼼꼼한 플래너",
        sub_title: "빈틈없는 현실주의자",
        tags: &["#준비성철저", "#안전제일"],
        description: "현실적이고 계획적인 당신. 혹시 MBTI가 'J'로 끝나나요?\n남들이 \"설마 그런 일이 생기겠어?\" 하며 넘기는 작은 실수도 당신의 레이더망을 피할 순 없죠.\n\n미래에 대한 불안을 완벽한 계획으로 잠재우는 당신은 친구들 사이에서 '걸어 다니는 준비물 가방'으로 통합니다. 여행 갈 때 분 단위 계획표는 기본, 혹시 몰라 비상약과 여벌 옷까지 챙겨야 마음이 편안해지는군요",
        main_img: "/images/nbti/P2_icn.png",
        shape_img: "/images/nbti/P2_shape.png",
        result_img: "/images/nbti/P2_result.jpg",
        match_nails: &[
            MatchNail { name: "프로스트블루", img: "/images/nbti/nail_P2_1.png" },
            MatchNail { name: "소프트마그넷", img: "/images/nbti/nail_P2_2.png" },
        ],
        is_emotional: EmotionalTendency::Emotional,
        is_slim: false,
        colors: PersonaTheme {
            bg: "#8DA399",
            text: "#3E4E46",
            dome: DOME,
            card: "rgba(255,255,255,0.25)",
        },
    },
    PersonaRecord {
        id: PersonaCode::P3,
        name: "화려한 슈퍼스타",
        sub_title: "어딜가나 시선 집중",
        tags: &["#도파민중독", "#트렌드세터"],
        description: "주목받는 것을 즐기는 당신은 진정한 핵인싸!\n새로운 도전과 트렌드에 가장 민감한 얼리어답터입니다. 남들보다 한발 앞서 나가는 짜릿함을 즐기고, \"어디서 샀어?\"라는 질문을 들을 때 가장 행복해하죠.\n\n지루한 건 딱 질색! 끊임없이 새로운 자극을 찾아 헤매는 당신은 숏폼 콘텐츠의 주인공이자 창조자입니다. 당신의 에너지는 주변 사람까지 들썩이게 만드는 힘이 있네요.",
        main_img: "/images/nbti/P3_icn.png",
        shape_img: "/images/nbti/P3_shape.png",
        result_img: "/images/nbti/P3_result.jpg",
        match_nails: &[
            MatchNail { name: "모브니트", img: "/images/nbti/nail_P3_1.png" },
            MatchNail { name: "플럼스타", img: "/images/nbti/nail_P3_2.png" },
        ],
        is_emotional: EmotionalTendency::Instinct,
        is_slim: true,
        colors: PersonaTheme {
            bg: "#E598D8",
            text: "#5A3A54",
            dome: DOME,
            card: "rgba(255,255,255,0.3)",
        },
    },
    PersonaRecord {
        id: PersonaCode::P4,
        name: "카리스마 보스",
        sub_title: "직진하는 승부사",
        tags: &["#리더십", "#목표지향"],
        description: "목표가 생기면 뒤도 안 보고 직진하는 불도저 같은 당신!\n시원시원한 리더십으로 주변을 이끄는 대장부 스타일이시군요. 복잡한 설명보다는 \"그래서 결론이 뭔데?\"를 선호하며, 확실한 성과와 보상을 중요하게 생각합니다.\n\n자신의 영역을 넓히고 지배하려는 욕구가 강해, 어딜가나 좌중을 압도하는 카리스마를 뿜어냅니다. 망설임 없는 당신의 결단력에 모두가 반할 수밖에 없겠네요.",
        main_img: "/images/nbti/P4_icn.png",
        shape_img: "/images/nbti/P4_shape.png",
        result_img: "/images/nbti/P4_result.jpg",
        match_nails: &[
            MatchNail { name: "블루아워", img: "/images/nbti/nail_P4_1.png" },
            MatchNail { name: "모카글레이즈드", img: "/images/nbti/nail_P4_2.png" },
        ],
        is_emotional: EmotionalTendency::Instinct,
        is_slim: false,
        colors: PersonaTheme {
            bg: "#D9A033",
            text: "#5C4217",
            dome: DOME,
            card: "rgba(255,255,255,0.3)",
        },
    },
    PersonaRecord {
        id: PersonaCode::P5,
        name: "고귀한 성직자",
        sub_title: "외유내강의 정석",
        tags: &["#완벽주의", "#조용한럭셔리"],
        description: "겉으로는 한없이 평온하고 우아해 보이지만, 물밑에선 누구보다 치열하게 물장구를 치고 있는 당신. 싸움을 싫어하고 평화를 지향하지만, 사실 그 평화는 당신의 고도화된 인내심과 노력으로 만들어진 것입니다.\n\n 남들에게 흐트러진 모습을 보이는 것을 싫어해서, 힘들어도 \"괜찮아요\"라고 웃어넘기는 경우가 많군요. 스스로에게 엄격한 외유내강형 리더입니다.",
        main_img: "/images/nbti/P5_icn.png",
        shape_img: "/images/nbti/P5_shape.png",
        result_img: "/images/nbti/P5_result.jpg",
        match_nails: &[
            MatchNail { name: "스노우치크", img: "/images/nbti/nail_P5_1.png" },
            MatchNail { name: "스모크마그넷", img: "/images/nbti/nail_P5_2.png" },
        ],
        is_emotional: EmotionalTendency::Balance,
        is_slim: true,
        colors: PersonaTheme {
            bg: "#AA9CBA",
            text: "#453B4D",
            dome: DOME,
            card: "rgba(255,255,255,0.25)",
        },
    },
    PersonaRecord {
        id: PersonaCode::P6,
        name: "단단한 바위",
        sub_title: "흔들리지 않는 편안함",
        tags: &["#인간시몬스", "#신뢰의아이콘"],
        description: "감정에 쉽게 휘둘리지 않고 언제나 침착한 당신은 인간 시몬스! 묵묵히 제 몫을 다하며 깊은 신뢰를 주는 당신 곁에 있으면, 누구나 마음의 안정을 얻게 됩니다.\n\n유행에 휩쓸리기보다는 변하지 않는 본질적인 가치를 중요하게 생각하며, 한번 맺은 인연을 소중히 여깁니다. 팀 내에서 묵묵히 중심을 잡아주는 정신적 지주 역할을 하는 경우가 많군요.",
        main_img: "/images/nbti/P6_icn.png",
        shape_img: "/images/nbti/P6_shape.png",
        result_img: "/images/nbti/P6_result.jpg",
        match_nails: &[
            MatchNail { name: "토피아가일", img: "/images/nbti/nail_P6_1.png" },
            MatchNail { name: "웨딩베일", img: "/images/nbti/nail_P6_2.png" },
        ],
        is_emotional: EmotionalTendency::Balance,
        is_slim: false,
        colors: PersonaTheme {
            bg: "#C9B9DB",
            text: "#2E3245",
            dome: DOME,
            card: "rgba(255,255,255,0.25)",
        },
    },
];
