//! Simplified SWU map onto the curve `E': y^2 = x^3 + A' x + B'`, which is
//! 3-isogenous to G2's curve.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::bls12_381::field::fq2::{fq2, ROOTS_OF_UNITY};
use crate::ec::bls12_381::field::Fq2;
use crate::error::{Error, Result};

/// A' = 240 i
const ISO_A: Fq2 = fq2(
    [0, 0, 0, 0, 0, 0],
    [
        0xe53a_0000_0313_5242,
        0x0108_0c0f_def8_0285,
        0xe788_9edb_e340_f6bd,
        0x0b51_3751_2631_0601,
        0x02d6_9857_17c7_44ab,
        0x1220_b4e9_79ea_5467,
    ],
);

/// B' = 1012 (1 + i)
const ISO_B: Fq2 = fq2(
    [
        0x22ea_0000_0cf8_9db2,
        0x6ec8_32df_7138_0aa4,
        0x6e1b_9440_3db5_a66e,
        0x75bf_3c53_a794_73ba,
        0x3dd3_a569_412c_0a34,
        0x125c_db5e_74dc_4fd1,
    ],
    [
        0x22ea_0000_0cf8_9db2,
        0x6ec8_32df_7138_0aa4,
        0x6e1b_9440_3db5_a66e,
        0x75bf_3c53_a794_73ba,
        0x3dd3_a569_412c_0a34,
        0x125c_db5e_74dc_4fd1,
    ],
);

/// Z = -(2 + i)
const ISO_Z: Fq2 = fq2(
    [
        0x87eb_ffff_fff9_555c,
        0x656f_ffe5_da8f_fffa,
        0x0fd0_7493_45d3_3ad2,
        0xd951_e663_0665_76f4,
        0xde29_1a3d_41e9_80d3,
        0x0815_664c_7dfe_040d,
    ],
    [
        0x43f5_ffff_fffc_aaae,
        0x32b7_fff2_ed47_fffd,
        0x07e8_3a49_a2e9_9d69,
        0xeca8_f331_8332_bb7a,
        0xef14_8d1e_a0f4_c069,
        0x040a_b326_3eff_0206,
    ],
);

/// (p^2 - 9) / 16
const SSWU_EXP: [u64; 12] = [
    0xb26a_a000_01c7_18e3,
    0xd7ce_d6b1_d763_82ea,
    0x3162_c338_3621_13cf,
    0x966b_f91e_d3e7_1b74,
    0xb292_e85a_8709_1a04,
    0x11d6_8619_c861_85c7,
    0xef53_1493_3097_8ef0,
    0x050a_62cf_d16d_dca6,
    0x466e_59e4_9349_e8bd,
    0x9e2d_c90e_50e7_046b,
    0x74bd_278e_aa22_f25e,
    0x002a_437a_4b8c_35fc,
];

/// Square roots of `Z^3 r` for the primitive eighth roots of unity `r`
const ETAS: [Fq2; 4] = [
    fq2(
        [
            0x486f_252d_b11d_d19c,
            0x791f_fda2_c3d1_8950,
            0x5af6_c27d_ebf9_5eb4,
            0x73b1_fd8f_2a92_9cde,
            0xfc59_602a_1a90_b871,
            0x08d7_daaf_a8ba_ddb3,
        ],
        [
            0xb864_0a06_7f5c_429f,
            0xcfd4_25f0_4b4d_c505,
            0x072d_7e2e_bb53_5cb1,
            0xd947_b5f9_d2b4_754d,
            0x46a7_1427_4077_4afb,
            0x0c31_864c_32fb_3b7e,
        ],
    ),
    fq2(
        [
            0x8671_6401_f7f7_377b,
            0xa31d_b74b_f3d0_3101,
            0x1423_2543_c645_9a3c,
            0x0a29_ccf6_8744_8752,
            0xe8c2_b010_201f_013c,
            0x0e68_b9d8_6c9e_98e4,
        ],
        [
            0x05e5_1466_8ac7_36d2,
            0x9089_b4d6_b84f_3ea5,
            0x603c_384c_224a_8b32,
            0xf325_7909_536a_fea6,
            0x5c5c_dbab_ae65_6d81,
            0x075b_fa08_63c9_87e9,
        ],
    ),
    fq2(
        [
            0xb864_0a06_7f5c_429f,
            0xcfd4_25f0_4b4d_c505,
            0x072d_7e2e_bb53_5cb1,
            0xd947_b5f9_d2b4_754d,
            0x46a7_1427_4077_4afb,
            0x0c31_864c_32fb_3b7e,
        ],
        [
            0x718f_dad2_4ee1_d90f,
            0xa58c_025b_ed82_76af,
            0x0c3a_1023_0ab7_976f,
            0xf0c5_4df5_c8f2_75e1,
            0x4ec2_478c_28ba_f465,
            0x1129_373a_90c5_08e6,
        ],
    ),
    fq2(
        [
            0x05e5_1466_8ac7_36d2,
            0x9089_b4d6_b84f_3ea5,
            0x603c_384c_224a_8b32,
            0xf325_7909_536a_fea6,
            0x5c5c_dbab_ae65_6d81,
            0x075b_fa08_63c9_87e9,
        ],
        [
            0x338d_9bfe_0808_7330,
            0x7b8e_48b2_bd83_cefe,
            0x530d_ad5d_306b_5be7,
            0x5a4d_7e8e_6c40_8b6d,
            0x6258_f7a6_232c_ab9b,
            0x0b98_5811_cce1_4db5,
        ],
    ),
];

/// Try `sqrt(u / v)` without an inversion.
///
/// Returns the root on success. On failure returns the candidate `gamma`,
/// which the caller reuses to build the root for `Z t^2 x1`. Every root of
/// unity is tried regardless of which one matches.
fn sqrt_ratio(u: &Fq2, v: &Fq2) -> (Choice, Fq2) {
    let v7 = v.square().square() * v.square() * v;
    let uv7 = u * v7;
    let uv15 = uv7 * v7 * v;
    let gamma = uv15.pow_vartime(&SSWU_EXP) * uv7;

    // the other four roots are the negations of these
    let candidates = ROOTS_OF_UNITY.iter().take(4).map(|root| *root * gamma);
    select_root(candidates, v, u, gamma)
}

/// First candidate `c` with `c^2 v = u`, scanning all of them
fn select_root(
    candidates: impl Iterator<Item = Fq2>,
    v: &Fq2,
    u: &Fq2,
    fallback: Fq2,
) -> (Choice, Fq2) {
    let mut found = Choice::from(0u8);
    let mut root = fallback;
    for candidate in candidates {
        let matches = (candidate.square() * v).ct_eq(u);
        root = Fq2::conditional_select(&root, &candidate, matches & !found);
        found |= matches;
    }
    (found, root)
}

/// Map a field element to a point of `E'`, returned as projective
/// `(x : y : z)` with `x = num / den` and `y = y' den / den`.
pub fn map_to_curve_sswu(t: &Fq2) -> Result<(Fq2, Fq2, Fq2)> {
    let t2 = t.square();
    let zt2 = ISO_Z * t2;
    let ztzt = zt2 + zt2.square();

    let den = -(ISO_A * ztzt);
    let den = Fq2::conditional_select(&den, &(ISO_Z * ISO_A), den.is_zero());
    let num = ISO_B * (ztzt + Fq2::one());

    let v = den.square() * den;
    let u = num.square() * num + ISO_A * num * den.square() + ISO_B * v;

    let (x1_square, gamma) = sqrt_ratio(&u, &v);

    // when x1 is not a square, x2 = Z t^2 x1 is
    let candidate = gamma * t2 * t;
    let u2 = zt2.square() * zt2 * u;
    let etas = ETAS.iter().map(|eta| *eta * candidate);
    let (x2_square, y2) = select_root(etas, &v, &u2, candidate);

    if !bool::from(x1_square | x2_square) {
        return Err(Error::Processing {
            operation: "map_to_curve_sswu",
            details: "neither x1 nor x2 has a square root",
        });
    }

    let num = Fq2::conditional_select(&(num * zt2), &num, x1_square);
    let y = Fq2::conditional_select(&y2, &gamma, x1_square);
    let y = Fq2::conditional_select(&y, &-y, t.sgn0() ^ y.sgn0());
    Ok((num, y * den, den))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::bls12_381::field::Fq;

    fn on_iso_curve((x, y, z): (Fq2, Fq2, Fq2)) -> bool {
        // y^2 z = x^3 + A' x z^2 + B' z^3
        let z2 = z.square();
        y.square() * z == x.square() * x + ISO_A * x * z2 + ISO_B * z2 * z
    }

    #[test]
    fn test_constants() {
        assert_eq!(ISO_A, Fq2::new(Fq::zero(), Fq::from_u64(240)));
        assert_eq!(ISO_B, Fq2::new(Fq::from_u64(1012), Fq::from_u64(1012)));
        assert_eq!(ISO_Z, -Fq2::new(Fq::from_u64(2), Fq::one()));
    }

    #[test]
    fn test_etas_square_to_z_cubed() {
        let z3 = ISO_Z.square() * ISO_Z;
        let primitive: Vec<Fq2> = ROOTS_OF_UNITY.iter().skip(1).step_by(2).copied().collect();
        for eta in ETAS.iter() {
            let ratio = eta.square() * z3.invert().unwrap();
            assert!(primitive.contains(&ratio));
        }
    }

    #[test]
    fn test_maps_onto_iso_curve() {
        let inputs = [
            Fq2::zero(),
            Fq2::one(),
            Fq2::from_u64(7),
            ISO_Z,
            ISO_A + ISO_B,
        ];
        for t in inputs {
            let p = map_to_curve_sswu(&t).unwrap();
            assert!(on_iso_curve(p));
        }
    }

    #[test]
    fn test_sqrt_ratio_scans_every_root() {
        // u / v = 4 is a square; a non-residue ratio falls back to gamma
        let v = Fq2::from_u64(3);
        let (found, root) = sqrt_ratio(&(Fq2::from_u64(4) * v), &v);
        assert!(bool::from(found));
        assert_eq!(root.square(), Fq2::from_u64(4));

        let (found, _) = sqrt_ratio(&(ISO_Z * v), &v);
        assert!(!bool::from(found));
    }

    #[test]
    fn test_both_branches_taken() {
        // t = 1 maps through x1 and t = 2 through x2
        let mut saw_x1 = false;
        let mut saw_x2 = false;
        for k in 0..16u64 {
            let t = Fq2::from_u64(k);
            let (num, _, den) = map_to_curve_sswu(&t).unwrap();
            let t2 = t.square();
            let zt2 = ISO_Z * t2;
            let ztzt = zt2 + zt2.square();
            let x1_num = ISO_B * (ztzt + Fq2::one());
            if num == x1_num {
                saw_x1 = true;
            } else {
                assert_eq!(num, x1_num * zt2);
                saw_x2 = true;
            }
            assert!(on_iso_curve(map_to_curve_sswu(&t).unwrap()));
            assert!(!bool::from(den.is_zero()));
        }
        assert!(saw_x1 && saw_x2);
    }

    #[test]
    fn test_sign_matches_input() {
        for t in [Fq2::one(), -Fq2::one(), Fq2::from_u64(5)] {
            let (_, y, z) = map_to_curve_sswu(&t).unwrap();
            let y = y * z.invert().unwrap();
            assert_eq!(bool::from(y.sgn0()), bool::from(t.sgn0()));
        }
    }
}
