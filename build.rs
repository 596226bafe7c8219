use std::cmp::Ordering;
use std::env;

// SIMD backends this crate can compile against
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            "neon" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Every backend works on a single 128-bit register of 4 f32 lanes
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                target_arch: &["x86", "x86_64"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Reads the features the target is compiled with. This is what matters for
// intrinsics, and it stays correct when cross-compiling.
struct TargetDetector {
    arch: String,
    target_features: String,
}

impl TargetDetector {
    fn from_env() -> Self {
        Self {
            arch: env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            target_features: env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default(),
        }
    }
}

impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.target_arch.contains(&self.arch.as_str())
                && self
                    .target_features
                    .split(',')
                    .any(|enabled| enabled == feature.name);
        }
    }

    fn is_applicable(&self) -> bool {
        !self.arch.is_empty()
    }
}

// `--features scalar` pins the portable backend
struct ForcedScalar;
impl CpuFeatureDetector for ForcedScalar {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = false;
        }
    }

    fn is_applicable(&self) -> bool {
        env::var_os("CARGO_FEATURE_SCALAR").is_some()
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(ForcedScalar), Box::new(TargetDetector::from_env())]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &mut [CpuFeature]) {
        features.sort();

        // if no feature is detected, use fallback implementation
        let cfg_flag = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected)
            .map(|cpu_feature| cpu_feature.cfg_flag)
            .unwrap_or("fallback");

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_SCALAR");

    let mut features = CpuFeature::features();

    PlatformDetector::detect_cpu_features(&mut features);

    PlatformDetector::apply(&mut features);
}
