//! Cohort measurements of the keto CTA follow-up, one year apart.
//!
//! Log ratios are `ln(value + 1)` quotients computed upstream; zeros mark
//! participants whose ratio is undefined or censored.

use crate::cohort::{
    Group2, Group3, LiteratureSlope, Marker, QAngioRecord, Rgb, Style, SubjectRecord,
};

/// Baseline `ln(CAC0+1)/ln(NCPV0+1)` of the participant marked in every plot.
pub const HIGHLIGHT_X: f64 = 0.772404;

pub const ZETA_STYLE: Style = Style::new(Rgb::ORANGE, Marker::Diamond);
pub const THETA_STYLE: Style = Style::new(Rgb::PURPLE, Marker::Circle);
pub const ETA_STYLE: Style = Style::new(Rgb::GREEN, Marker::Square);
pub const GAMMA_STYLE: Style = Style::new(Rgb::BLUE, Marker::Triangle);
pub const BETA_STYLE: Style = Style::new(Rgb::BLUE, Marker::Circle);

/// ln(ΔNCPV + 1) against ln(ΔCAC + 1).
pub fn delta_groups() -> Vec<Group2> {
    vec![
        Group2::new("Theta", THETA_STYLE, DELTA_X_THETA.to_vec(), DELTA_Y_THETA.to_vec()),
        Group2::new("Eta", ETA_STYLE, DELTA_X_ETA.to_vec(), DELTA_Y_ETA.to_vec()),
        Group2::new("Zeta", ZETA_STYLE, DELTA_X_ZETA.to_vec(), DELTA_Y_ZETA.to_vec()),
    ]
}

/// CAC/NCPV ratios at baseline and follow-up against ln(CAC1 + 1), zeros already removed.
pub fn ratio_groups() -> Vec<Group3> {
    vec![
        Group3::new(
            "ζ (Reversing, N=6)",
            ZETA_STYLE,
            RATIO_X_ZETA.to_vec(),
            RATIO_Y_ZETA.to_vec(),
            RATIO_Z_ZETA.to_vec(),
        ),
        Group3::new(
            "θ (Smaller CAC increase, N=23)",
            THETA_STYLE,
            RATIO_X_THETA.to_vec(),
            RATIO_Y_THETA.to_vec(),
            RATIO_Z_THETA.to_vec(),
        ),
        Group3::new(
            "η (Larger CAC increase, N=17)",
            ETA_STYLE,
            RATIO_X_ETA.to_vec(),
            RATIO_Y_ETA.to_vec(),
            RATIO_Z_ETA.to_vec(),
        ),
    ]
}

/// The progressing β cohort, the union of θ and η with their zero rows.
pub fn beta_group() -> Group3 {
    Group3::new(
        "β (Progressing, N=40)",
        BETA_STYLE,
        BETA_X.to_vec(),
        BETA_Y.to_vec(),
        BETA_Z.to_vec(),
    )
}

/// All twelve ζ participants, including the ones with a zero ratio.
pub fn zeta_full_group() -> Group3 {
    Group3::new(
        "ζ (Reversing)",
        ZETA_STYLE,
        ZETA_FULL_X.to_vec(),
        ZETA_FULL_Y.to_vec(),
        ZETA_FULL_Z.to_vec(),
    )
}

/// Tps0 against Ln(CAC0/ΔQAngio) and Ln(CAC1/ΔQAngio), N=10.
pub fn qangio_pairs() -> Vec<QAngioRecord> {
    [
        (2, 0.0, 0.0, 0.0),
        (48, 0.0, 0.0, 0.0),
        (53, 0.0, 0.03174869831458027, 0.0),
        (82, 1.3941995406270038, 1.495219942942213, 4.0),
        (85, 0.859493133481022, 0.936935059454501, 4.0),
        (86, 1.8365734850178477, 1.9947003132247452, 4.0),
        (87, 1.556193397915288, 1.5716975844512533, 4.0),
        (93, 2.4895255956442948, 2.6230569882688175, 7.0),
        (96, 1.6696064339005532, 1.939243457697124, 8.0),
        (100, 4.31303376318693, 4.458215773031428, 13.0),
    ]
    .into_iter()
    .map(|(id, ln_cac0_ratio, ln_cac1_ratio, tps0)| QAngioRecord {
        id,
        ln_cac0_ratio,
        ln_cac1_ratio,
        tps0,
    })
    .collect()
}

/// Cohort colour of a QAngio participant.
pub fn qangio_color(id: u32) -> Rgb {
    match id {
        2 => Rgb::YELLOW,
        48 => Rgb::BLUE,
        53 | 87 => Rgb::PURPLE,
        _ => Rgb::LIGHT_GREEN,
    }
}

/// Published QAngio fits, `(slope, intercept)` of Tps0 on each log ratio.
pub const QANGIO_CAC0_FIT: (f64, f64) = (2.9332, 0.2587);
pub const QANGIO_CAC1_FIT: (f64, f64) = (2.8462, 0.1162);

/// Ratio pairs of the velocity chart, `z` is the time point score.
pub fn qangio_velocity_groups() -> Vec<Group3> {
    vec![
        Group3::new(
            "ζ Zeta - regressing",
            ZETA_STYLE,
            vec![0.0],
            vec![0.0],
            vec![0.0],
        ),
        Group3::new(
            "θ Theta - CAC",
            THETA_STYLE,
            vec![0.0, 1.556193397915288],
            vec![0.03174869831458027, 1.5716975844512533],
            vec![0.0, 4.0],
        ),
        Group3::new(
            "η Eta - CAC++",
            ETA_STYLE,
            vec![
                1.3941995406270038,
                0.859493133481022,
                1.8365734850178477,
                2.4895255956442948,
                1.6696064339005532,
                4.31303376318693,
            ],
            vec![
                1.495219942942213,
                0.936935059454501,
                1.9947003132247452,
                2.6230569882688175,
                1.939243457697124,
                4.458215773031428,
            ],
            vec![4.0, 4.0, 4.0, 7.0, 8.0, 13.0],
        ),
        Group3::new(
            "γ Gamma - no CAC",
            GAMMA_STYLE,
            vec![0.0],
            vec![0.0],
            vec![0.0],
        ),
    ]
}

/// Fly-through cohorts: baseline ratio, follow-up ratio, ln(CAC1 + 1).
pub fn stereo_groups() -> Vec<Group3> {
    vec![
        Group3::new(
            "Zeta (Regressors)",
            ZETA_STYLE,
            STEREO_RATIO0_ZETA.to_vec(),
            STEREO_RATIO1_ZETA.to_vec(),
            STEREO_LN_CAC1_ZETA.to_vec(),
        ),
        Group3::new(
            "Theta (Low/Zero CAC)",
            THETA_STYLE,
            STEREO_RATIO0_THETA.to_vec(),
            STEREO_RATIO1_THETA.to_vec(),
            STEREO_LN_CAC1_THETA.to_vec(),
        ),
        Group3::new(
            "Eta (High CAC)",
            ETA_STYLE,
            STEREO_RATIO0_ETA.to_vec(),
            STEREO_RATIO1_ETA.to_vec(),
            STEREO_LN_CAC1_ETA.to_vec(),
        ),
    ]
}

/// Large CAC increase.
pub fn eta_subjects() -> Vec<SubjectRecord> {
    vec![
        SubjectRecord::new(62, 27.0, 41.0, 45.3, 51.6),
        SubjectRecord::new(76, 69.0, 105.0, 53.4, 112.2),
        SubjectRecord::new(78, 81.0, 97.0, 82.4, 168.4),
        SubjectRecord::new(79, 53.0, 103.0, 130.5, 179.0),
        SubjectRecord::new(80, 66.0, 97.0, 78.0, 89.6),
        SubjectRecord::new(82, 191.0, 218.0, 233.8, 345.8),
        SubjectRecord::new(83, 217.0, 245.0, 169.0, 182.2),
        SubjectRecord::new(84, 17.0, 35.0, 58.9, 76.4),
        SubjectRecord::new(85, 222.0, 253.0, 244.9, 357.9),
        SubjectRecord::new(86, 211.0, 254.0, 365.6, 428.5),
        SubjectRecord::new(88, 88.0, 100.0, 238.5, 307.3),
        SubjectRecord::new(90, 388.0, 400.0, 147.2, 194.8),
        SubjectRecord::new(93, 199.0, 230.0, 290.8, 378.9),
        SubjectRecord::new(96, 556.0, 768.0, 255.8, 389.6),
        SubjectRecord::new(98, 265.0, 322.0, 200.3, 275.1),
        SubjectRecord::new(99, 194.0, 272.0, 71.8, 103.6),
        SubjectRecord::new(100, 221.0, 256.0, 450.6, 606.5),
    ]
}

/// Regressing CAC.
pub fn zeta_subjects() -> Vec<SubjectRecord> {
    vec![
        SubjectRecord::new(2, 0.0, 0.0, 193.3, 212.2),
        SubjectRecord::new(51, 6.0, 0.0, 19.6, 42.0),
        SubjectRecord::new(54, 2.0, 0.0, 64.9, 68.5),
        SubjectRecord::new(55, 0.0, 0.0, 68.2, 71.4),
        SubjectRecord::new(56, 0.0, 0.0, 15.5, 31.0),
        SubjectRecord::new(63, 68.0, 62.0, 77.3, 96.1),
        SubjectRecord::new(65, 1.0, 0.0, 113.6, 162.0),
        SubjectRecord::new(66, 58.0, 39.0, 91.1, 119.7),
        SubjectRecord::new(77, 360.0, 353.0, 174.6, 210.0),
        SubjectRecord::new(89, 135.0, 135.0, 46.2, 41.7),
        SubjectRecord::new(94, 291.0, 351.0, 174.9, 245.0),
        SubjectRecord::new(95, 175.0, 193.0, 73.4, 92.7),
    ]
}

/// Small or zero CAC increase.
pub fn theta_subjects() -> Vec<SubjectRecord> {
    vec![
        SubjectRecord::new(17, 0.0, 1.0, 6.3, 19.8),
        SubjectRecord::new(49, 0.0, 2.0, 39.7, 57.0),
        SubjectRecord::new(50, 0.0, 1.0, 26.3, 60.7),
        SubjectRecord::new(52, 0.0, 1.0, 20.8, 45.7),
        SubjectRecord::new(53, 0.0, 1.0, 67.1, 166.7),
        SubjectRecord::new(57, 4.0, 6.0, 94.7, 130.8),
        SubjectRecord::new(59, 37.0, 37.0, 42.4, 64.7),
        SubjectRecord::new(61, 9.0, 13.0, 12.8, 15.2),
        SubjectRecord::new(64, 63.0, 67.0, 53.3, 104.7),
        SubjectRecord::new(67, 4.0, 8.0, 139.4, 153.6),
        SubjectRecord::new(68, 0.0, 3.0, 171.5, 211.9),
        SubjectRecord::new(69, 21.0, 21.0, 53.7, 99.3),
        SubjectRecord::new(70, 10.0, 18.0, 52.1, 62.5),
        SubjectRecord::new(71, 3.0, 5.0, 164.2, 220.0),
        SubjectRecord::new(72, 12.0, 17.0, 290.2, 301.0),
        SubjectRecord::new(73, 39.0, 49.0, 83.3, 97.7),
        SubjectRecord::new(74, 2.0, 7.0, 141.1, 191.0),
        SubjectRecord::new(75, 21.0, 31.0, 106.8, 116.5),
        SubjectRecord::new(81, 80.0, 81.0, 163.9, 248.2),
        SubjectRecord::new(87, 101.0, 103.0, 100.5, 180.3),
        SubjectRecord::new(91, 119.0, 124.0, 183.5, 213.8),
        SubjectRecord::new(92, 295.0, 300.0, 252.3, 319.7),
        SubjectRecord::new(97, 47.0, 54.0, 105.7, 166.7),
    ]
}

/// No CAC at either visit.
pub fn gamma_subjects() -> Vec<SubjectRecord> {
    vec![
        SubjectRecord::new(1, 0.0, 0.0, 9.3, 18.8),
        SubjectRecord::new(3, 0.0, 0.0, 6.5, 23.2),
        SubjectRecord::new(4, 0.0, 0.0, 1.8, 9.1),
        SubjectRecord::new(5, 0.0, 0.0, 15.6, 24.8),
        SubjectRecord::new(6, 0.0, 0.0, 10.4, 11.8),
        SubjectRecord::new(7, 0.0, 0.0, 48.4, 80.4),
        SubjectRecord::new(8, 0.0, 0.0, 65.6, 82.5),
        SubjectRecord::new(9, 0.0, 0.0, 3.8, 13.1),
        SubjectRecord::new(10, 0.0, 0.0, 42.8, 64.4),
        SubjectRecord::new(11, 0.0, 0.0, 21.7, 44.4),
        SubjectRecord::new(12, 0.0, 0.0, 4.9, 16.7),
        SubjectRecord::new(13, 0.0, 0.0, 27.8, 39.3),
        SubjectRecord::new(14, 0.0, 0.0, 22.4, 55.9),
        SubjectRecord::new(15, 0.0, 0.0, 26.5, 70.9),
        SubjectRecord::new(16, 0.0, 0.0, 0.0, 0.0),
        SubjectRecord::new(18, 0.0, 0.0, 8.0, 15.3),
        SubjectRecord::new(19, 0.0, 0.0, 0.0, 13.6),
        SubjectRecord::new(20, 0.0, 0.0, 45.7, 64.0),
        SubjectRecord::new(21, 0.0, 0.0, 13.5, 20.7),
        SubjectRecord::new(22, 0.0, 0.0, 1.7, 6.8),
        SubjectRecord::new(23, 0.0, 0.0, 21.0, 67.3),
        SubjectRecord::new(24, 0.0, 0.0, 5.7, 9.9),
        SubjectRecord::new(25, 0.0, 0.0, 16.5, 58.4),
        SubjectRecord::new(26, 0.0, 0.0, 0.0, 9.2),
        SubjectRecord::new(27, 0.0, 0.0, 23.3, 25.7),
        SubjectRecord::new(28, 0.0, 0.0, 5.3, 5.3),
        SubjectRecord::new(29, 0.0, 0.0, 101.1, 156.6),
        SubjectRecord::new(30, 0.0, 0.0, 9.9, 39.4),
        SubjectRecord::new(31, 0.0, 0.0, 3.3, 9.0),
        SubjectRecord::new(32, 0.0, 0.0, 0.0, 3.9),
        SubjectRecord::new(33, 0.0, 0.0, 15.4, 25.7),
        SubjectRecord::new(34, 0.0, 0.0, 24.0, 40.4),
        SubjectRecord::new(35, 0.0, 0.0, 28.3, 58.0),
        SubjectRecord::new(36, 0.0, 0.0, 20.7, 26.1),
        SubjectRecord::new(37, 0.0, 0.0, 2.2, 9.7),
        SubjectRecord::new(38, 0.0, 0.0, 12.4, 23.0),
        SubjectRecord::new(39, 0.0, 0.0, 23.6, 44.3),
        SubjectRecord::new(40, 0.0, 0.0, 17.2, 25.4),
        SubjectRecord::new(41, 0.0, 0.0, 24.2, 35.3),
        SubjectRecord::new(42, 0.0, 0.0, 1.4, 4.6),
        SubjectRecord::new(43, 0.0, 0.0, 36.7, 80.2),
        SubjectRecord::new(44, 0.0, 0.0, 18.9, 21.9),
        SubjectRecord::new(45, 0.0, 0.0, 3.8, 4.0),
        SubjectRecord::new(46, 0.0, 0.0, 20.0, 32.8),
        SubjectRecord::new(47, 0.0, 0.0, 61.8, 98.3),
        SubjectRecord::new(48, 0.0, 0.0, 26.6, 104.0),
        SubjectRecord::new(58, 0.0, 0.0, 82.8, 144.9),
        SubjectRecord::new(60, 0.0, 0.0, 4.4, 11.2),
    ]
}

pub fn doubling_cohorts() -> Vec<(&'static str, Vec<SubjectRecord>)> {
    vec![
        ("Eta", eta_subjects()),
        ("Zeta", zeta_subjects()),
        ("Theta", theta_subjects()),
        ("Gamma", gamma_subjects()),
    ]
}

/// Slopes of the ratio against doubling-time regressions per cohort set.
pub fn literature_slopes() -> Vec<LiteratureSlope> {
    const CAC: &str = "Cac1/Cac0 vs TdCac";
    const NCPV: &str = "Ncpv1/Ncpv0 vs TdNcpv";
    const QANGIO: &str = "QAngio1/QAngio0 vs TdQAng";
    vec![
        LiteratureSlope::new(CAC, "Eta-17", -0.0312, 0.5601),
        LiteratureSlope::new(CAC, "Theta-17", -0.0141, 0.6968),
        LiteratureSlope::new(CAC, "Beta-34", -0.0137, 0.7065),
        LiteratureSlope::new(CAC, "Alpha-82", 0.0209, 0.8007),
        LiteratureSlope::new(CAC, "Omega-91", 0.0151, 0.8431),
        LiteratureSlope::new(CAC, "Zeta-9", -0.0067, 0.8879),
        LiteratureSlope::new(CAC, "BetaUZeta-43", -0.0030, 0.9455),
        LiteratureSlope::new(NCPV, "Gamma-45", -0.1963, 0.66116372),
        LiteratureSlope::new(NCPV, "Alpha-85", -0.1404, 0.62700814),
        LiteratureSlope::new(NCPV, "Omega-97", -0.1035, 0.67059389),
        LiteratureSlope::new(NCPV, "Eta-17", -0.0951, 0.38383917),
        LiteratureSlope::new(NCPV, "Beta-40", -0.0741, 0.53942816),
        LiteratureSlope::new(NCPV, "Theta-23", -0.0723, 0.55267777),
        LiteratureSlope::new(NCPV, "BetaUZeta-52", -0.0489, 0.63405439),
        LiteratureSlope::new(NCPV, "Zeta-12", -0.0178, 0.80121905),
        LiteratureSlope::new(QANGIO, "Omega-10", -0.0518, 0.81123843),
        LiteratureSlope::new(QANGIO, "BetaUZeta-9", -0.0543, 0.80451432),
        LiteratureSlope::new(QANGIO, "Alpha-9", -0.0611, 0.77587065),
        LiteratureSlope::new(QANGIO, "Beta-8", -0.0651, 0.76433206),
        LiteratureSlope::new(QANGIO, "Eta-6", -0.0312, 0.49525457),
    ]
}

const DELTA_X_THETA: [f64; 23] = [
    2.674148649, 2.90690106, 3.56671182, 3.254242969, 4.611152258, 3.61361697, 3.148453361,
    1.223775432, 3.958906591, 2.721295428, 3.723280881, 3.841600541, 2.433613355, 4.039536326,
    2.468099531, 2.734367509, 3.929862924, 2.370243741, 4.446174454, 4.391976966, 3.443618098,
    4.225372825, 4.127134385,
];

const DELTA_Y_THETA: [f64; 23] = [
    0.693147181, 1.098612289, 0.693147181, 0.693147181, 0.693147181, 1.098612289, 0.0,
    1.609437912, 1.609437912, 1.609437912, 1.386294361, 0.0, 2.197224577, 1.098612289,
    1.791759469, 2.397895273, 1.791759469, 2.397895273, 0.693147181, 1.098612289, 1.791759469,
    1.791759469, 2.079441542,
];

const DELTA_X_ETA: [f64; 17] = [
    1.987874348, 4.091005661, 4.465908119, 3.90197267, 2.533696814, 4.727387819, 2.653241965,
    2.917770732, 4.736198448, 4.157319361, 4.24563401, 3.883623531, 4.489759334, 4.903792198,
    4.328098293, 3.490428515, 5.05560866,
];

const DELTA_Y_ETA: [f64; 17] = [
    2.708050201, 3.610917913, 2.833213344, 3.931825633, 3.465735903, 3.33220451, 3.36729583,
    2.944438979, 3.465735903, 3.784189634, 2.564949357, 2.564949357, 3.465735903, 5.361292166,
    4.060443011, 4.369447852, 3.583518938,
];

const DELTA_X_ZETA: [f64; 12] = [
    2.990719732, 3.152736022, 1.526056303, 1.435084525, 2.803360381, 2.985681938, 3.899950424,
    3.387774361, 3.594568775, 1.704748092, 4.264087337, 3.010620886,
];

const DELTA_Y_ZETA: [f64; 12] = [
    0.0, 1.945910149, 1.098612289, 0.0, 0.0, 1.945910149, 0.693147181, 2.995732274,
    2.079441542, 0.0, 4.110873864, 2.944438979,
];

const RATIO_X_ZETA: [f64; 6] = [
    0.9710033899612511, 0.9015366321328295, 1.1394427589104996, 1.2745596383334394,
    1.0980360579681494, 1.1997997113370333,
];

const RATIO_Y_ZETA: [f64; 6] = [
    0.9253378102738982, 0.8506729246131384, 1.100342686869395, 1.3085760744476183,
    1.0311375010237032, 1.1388484961156078,
];

const RATIO_Z_ZETA: [f64; 6] = [
    4.143134726391533, 3.6888794541139363, 5.869296913133774, 4.912654885736052,
    5.863631175598097, 5.267858159063328,
];

const RATIO_X_THETA: [f64; 17] = [
    0.35285263872984957, 0.9647593924678355, 0.877286031413336, 1.0411460407002446,
    0.3255009363788492, 0.7724007307085876, 0.6036728262897569, 0.27144150822594215,
    0.45205229008535625, 0.8318813233527058, 0.22164943200951182, 0.6604399736330077,
    0.8607555653155671, 1.0010636260309163, 0.9175571828446315, 1.0281475831090183,
    0.8289472102329216,
];

const RATIO_Y_THETA: [f64; 17] = [
    0.3297159881728276, 0.8691756693182583, 0.8267776654084305, 0.8923483493991499,
    0.31927963388710684, 0.6707750237222871, 0.5776613396057578, 0.25680855464584623,
    0.4491694490897574, 0.8033125469454092, 0.20896115182777275, 0.6485015093091424,
    0.7963474917371539, 0.8893916599278506, 0.891574050402815, 0.9861109838733201,
    0.7557726453415707,
];

const RATIO_Z_THETA: [f64; 17] = [
    1.9459101490553132, 3.6375861597263857, 2.6390573296152584, 4.219507705176107,
    2.1972245773362196, 3.091042453358316, 2.9444389791664403, 1.791759469228055,
    2.8903717578961645, 3.912023005428146, 2.0794415416798357, 3.4657359027997265,
    4.406719247264253, 4.6443908991413725, 4.8283137373023015, 5.707110264748875,
    4.007333185232471,
];

const RATIO_X_ETA: [f64; 17] = [
    0.8688607994125579, 1.0630901185378252, 0.9961730542492246, 0.8175811528613812,
    0.9622938095066099, 0.9631345449908901, 1.0484241406252823, 0.7062302027241281,
    0.9822425957367792, 0.9072391782794026, 0.8193105055662985, 1.1930588223437388,
    0.9334484316946257, 1.1395504941992651, 1.0525373565090204, 1.229792181584599,
    0.883830680147293,
];

const RATIO_Y_ETA: [f64; 17] = [
    0.8408890290104237, 0.8983622221657899, 0.8586308679540858, 0.7681527424747342,
    0.9330379097641369, 0.8989095019787317, 1.033377601382106, 0.664608080850563,
    0.9191112554962112, 0.8835428801490052, 0.7832104228023535, 1.130087818908135,
    0.8919864268699415, 1.0594671601894434, 0.9933697952812031, 1.1339433933635201,
    0.842936576767417,
];

const RATIO_Z_ETA: [f64; 17] = [
    3.7376696182833684, 4.663439094112067, 4.584967478670572, 4.6443908991413725,
    4.584967478670572, 5.389071729816501, 5.5053315359323625, 3.58351893845611,
    5.537334267018537, 5.541263545158426, 4.61512051684126, 5.993961427306569,
    5.442417710521793, 6.645090969505644, 5.777652323222656, 5.60947179518496,
    5.54907608489522,
];

const BETA_X: [f64; 40] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.35285263872984957, 0.9647593924678355, 0.877286031413336,
    0.8688607994125579, 1.0411460407002446, 0.3255009363788492, 0.0, 0.7724007307085876,
    0.6036728262897569, 0.27144150822594215, 0.45205229008535625, 0.8318813233527058,
    0.22164943200951182, 0.6604399736330077, 1.0630901185378252, 0.9961730542492246,
    0.8175811528613812, 0.9622938095066099, 0.8607555653155671, 0.9631345449908901,
    1.0484241406252823, 0.7062302027241281, 0.9822425957367792, 0.9072391782794026,
    1.0010636260309163, 0.8193105055662985, 1.1930588223437388, 0.9175571828446315,
    1.0281475831090183, 0.9334484316946257, 1.1395504941992651, 0.8289472102329216,
    1.0525373565090204, 1.229792181584599, 0.883830680147293,
];

const BETA_Y: [f64; 40] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.3297159881728276, 0.8691756693182583, 0.8267776654084305,
    0.8408890290104237, 0.8923483493991499, 0.31927963388710684, 0.0, 0.6707750237222871,
    0.5776613396057578, 0.25680855464584623, 0.4491694490897574, 0.8033125469454092,
    0.20896115182777275, 0.6485015093091424, 0.8983622221657899, 0.8586308679540858,
    0.7681527424747342, 0.9330379097641369, 0.7963474917371539, 0.8989095019787317,
    1.033377601382106, 0.664608080850563, 0.9191112554962112, 0.8835428801490052,
    0.8893916599278506, 0.7832104228023535, 1.130087818908135, 0.891574050402815,
    0.9861109838733201, 0.8919864268699415, 1.0594671601894434, 0.7557726453415707,
    0.9933697952812031, 1.1339433933635201, 0.842936576767417,
];

const BETA_Z: [f64; 40] = [
    0.6931471805599453, 1.0986122886681098, 0.6931471805599453, 0.6931471805599453,
    0.6931471805599453, 1.9459101490553132, 3.6375861597263857, 2.6390573296152584,
    3.7376696182833684, 4.219507705176107, 2.1972245773362196, 1.3862943611198906,
    3.091042453358316, 2.9444389791664403, 1.791759469228055, 2.8903717578961645,
    3.912023005428146, 2.0794415416798357, 3.4657359027997265, 4.663439094112067,
    4.584967478670572, 4.6443908991413725, 4.584967478670572, 4.406719247264253,
    5.389071729816501, 5.5053315359323625, 3.58351893845611, 5.537334267018537,
    5.541263545158426, 4.6443908991413725, 4.61512051684126, 5.993961427306569,
    4.8283137373023015, 5.707110264748875, 5.442417710521793, 6.645090969505644,
    4.007333185232471, 5.777652323222656, 5.60947179518496, 5.54907608489522,
];

const ZETA_FULL_X: [f64; 12] = [
    0.0, 0.6432141900737977, 0.26231517988512754, 0.0, 0.0, 0.9710033899612511,
    0.1461889298737325, 0.9015366321328295, 1.1394427589104996, 1.2745596383334394,
    1.0980360579681494, 1.1997997113370333,
];

const ZETA_FULL_Y: [f64; 12] = [
    0.0, 0.5173641628202729, 0.25902561928345197, 0.0, 0.0, 0.9253378102738982,
    0.1360779687331669, 0.8506729246131384, 1.100342686869395, 1.3085760744476183,
    1.0311375010237032, 1.1388484961156078,
];

const ZETA_FULL_Z: [f64; 12] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 4.143134726391533, 0.0, 3.6888794541139363, 5.869296913133774,
    4.912654885736052, 5.863631175598097, 5.267858159063328,
];

const STEREO_RATIO0_ZETA: [f64; 12] = [
    0.0, 0.6432141900737977, 0.26231517988512754, 0.0, 0.0, 0.9710033899612511,
    0.1461889298737325, 0.9015366321328295, 1.1394427589104996, 1.2745596383334394,
    1.0980360579681494, 1.1997997113370333,
];

const STEREO_RATIO1_ZETA: [f64; 12] = [
    0.0, 0.5173641628202729, 0.25902561928345197, 0.0, 0.0, 0.9253378102738982,
    0.1360779687331669, 0.8506729246131384, 1.100342686869395, 1.3085760744476183,
    1.0311375010237032, 1.1388484961156078,
];

const STEREO_LN_CAC1_ZETA: [f64; 12] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 4.143134726391533, 0.0, 3.6888794541139363, 5.869296913133774,
    4.912654885736052, 5.863631175598097, 5.267858159063328,
];

const STEREO_RATIO0_THETA: [f64; 23] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.35285263872984957, 0.9647593924678355, 0.877286031413336,
    1.0411460407002446, 0.3255009363788492, 0.0, 0.7724007307085876, 0.6036728262897569,
    0.27144150822594215, 0.45205229008535625, 0.8318813233527058, 0.22164943200951182,
    0.6604399736330077, 0.8607555653155671, 1.0010636260309163, 0.9175571828446315,
    1.0281475831090183, 0.8289472102329216,
];

const STEREO_RATIO1_THETA: [f64; 23] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.3297159881728276, 0.8691756693182583, 0.8267776654084305,
    0.8923483493991499, 0.31927963388710684, 0.0, 0.6707750237222871, 0.5776613396057578,
    0.25680855464584623, 0.4491694490897574, 0.8033125469454092, 0.20896115182777275,
    0.6485015093091424, 0.7963474917371539, 0.8893916599278506, 0.891574050402815,
    0.9861109838733201, 0.7557726453415707,
];

const STEREO_LN_CAC1_THETA: [f64; 23] = [
    0.6931471805599453, 1.0986122886681098, 0.6931471805599453, 0.6931471805599453,
    0.6931471805599453, 1.9459101490553132, 3.6375861597263857, 2.6390573296152584,
    4.219507705176107, 2.1972245773362196, 1.3862943611198906, 3.091042453358316,
    2.9444389791664403, 1.791759469228055, 2.8903717578961645, 3.912023005428146,
    2.0794415416798357, 3.4657359027997265, 4.406719247264253, 4.6443908991413725,
    4.8283137373023015, 5.707110264748875, 4.007333185232471,
];

const STEREO_RATIO0_ETA: [f64; 17] = [
    0.8688607994125579, 1.0630901185378252, 0.9961730542492246, 0.8175811528613812,
    0.9622938095066099, 0.9631345449908901, 1.0484241406252823, 0.7062302027241281,
    0.9822425957367792, 0.9072391782794026, 0.8193105055662985, 1.1930588223437388,
    0.9334484316946257, 1.1395504941992651, 1.0525373565090204, 1.229792181584599,
    0.883830680147293,
];

const STEREO_RATIO1_ETA: [f64; 17] = [
    0.8408890290104237, 0.8983622221657899, 0.8586308679540858, 0.7681527424747342,
    0.9330379097641369, 0.8989095019787317, 1.033377601382106, 0.664608080850563,
    0.9191112554962112, 0.8835428801490052, 0.7832104228023535, 1.130087818908135,
    0.8919864268699415, 1.0594671601894434, 0.9933697952812031, 1.1339433933635201,
    0.842936576767417,
];

const STEREO_LN_CAC1_ETA: [f64; 17] = [
    3.7376696182833684, 4.663439094112067, 4.584967478670572, 4.6443908991413725,
    4.584967478670572, 5.389071729816501, 5.5053315359323625, 3.58351893845611,
    5.537334267018537, 5.541263545158426, 4.61512051684126, 5.993961427306569,
    5.442417710521793, 6.645090969505644, 5.777652323222656, 5.60947179518496,
    5.54907608489522,
];


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_sizes() {
        let delta: Vec<usize> = delta_groups().iter().map(Group2::len).collect();
        assert_eq!(delta, vec![23, 17, 12]);
        let ratio: Vec<usize> = ratio_groups().iter().map(Group3::len).collect();
        assert_eq!(ratio, vec![6, 17, 17]);
        assert_eq!(beta_group().len(), 40);
        assert_eq!(zeta_full_group().masked().len(), 6);
        assert_eq!(qangio_pairs().len(), 10);
        assert_eq!(eta_subjects().len(), 17);
        assert_eq!(zeta_subjects().len(), 12);
        assert_eq!(theta_subjects().len(), 23);
        assert_eq!(gamma_subjects().len(), 48);
        assert_eq!(literature_slopes().len(), 20);
    }

    #[test]
    fn stereo_groups_are_aligned() {
        let sizes: Vec<usize> = stereo_groups().iter().map(Group3::len).collect();
        assert_eq!(sizes, vec![12, 23, 17]);
    }
}
