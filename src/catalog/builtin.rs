//! Built-in dependency definitions.
//!
//! Entries are grouped the way the report shows them: toolkit core, the
//! host's native toolchain and display libraries, then mobile, web,
//! performance and compatibility checks.

use super::names;
use super::types::{Category, DependencyDescriptor, Platform, Probe, Severity};
use crate::shell::HostOs;

/// OS-specific core additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsExtras {
    Windows,
    Mac,
    Linux,
}

impl OsExtras {
    /// Select the extras for a host, if it has any.
    pub fn for_host(host: HostOs) -> Option<Self> {
        match host {
            HostOs::Windows => Some(OsExtras::Windows),
            HostOs::MacOs => Some(OsExtras::Mac),
            HostOs::Linux => Some(OsExtras::Linux),
            HostOs::Other => None,
        }
    }

    /// Dependencies for this OS family, in display order.
    pub fn dependencies(&self) -> Vec<DependencyDescriptor> {
        match self {
            OsExtras::Windows => windows_extras(),
            OsExtras::Mac => mac_extras(),
            OsExtras::Linux => linux_extras(),
        }
    }
}

/// Toolkit runtime, packaging CLI and the optional cross-build helper.
pub fn core_dependencies() -> Vec<DependencyDescriptor> {
    vec![
        DependencyDescriptor::new(
            names::GO,
            Probe::command("go version"),
            "Go programming language (minimum version 1.12)",
        ),
        DependencyDescriptor::new(
            names::FYNE_CLI,
            Probe::command("fyne version"),
            "Fyne command line tools",
        ),
        DependencyDescriptor {
            optional: true,
            severity: Severity::Info,
            ..DependencyDescriptor::new(
                names::FYNE_CROSS,
                Probe::command("fyne-cross --version"),
                "Cross-platform build tool for Fyne",
            )
        },
    ]
}

fn windows_extras() -> Vec<DependencyDescriptor> {
    vec![
        DependencyDescriptor {
            platform: Platform::Windows,
            ..DependencyDescriptor::new(
                "C Compiler (MSYS2)",
                Probe::command("gcc --version"),
                "C compiler for Windows (MSYS2/MingW-w64 recommended)",
            )
        },
        DependencyDescriptor {
            platform: Platform::Windows,
            ..DependencyDescriptor::new(
                "MSYS2",
                Probe::command("pacman --version"),
                "MSYS2 package manager",
            )
        },
    ]
}

fn mac_extras() -> Vec<DependencyDescriptor> {
    vec![
        DependencyDescriptor {
            platform: Platform::MacOs,
            ..DependencyDescriptor::new(
                "Xcode CLI Tools",
                Probe::command("xcode-select -p"),
                "Xcode command line tools",
            )
        },
        DependencyDescriptor {
            platform: Platform::MacOs,
            ..DependencyDescriptor::new(
                names::C_COMPILER,
                Probe::command("clang --version"),
                "Clang compiler (comes with Xcode)",
            )
        },
    ]
}

fn linux_extras() -> Vec<DependencyDescriptor> {
    vec![
        DependencyDescriptor {
            platform: Platform::Linux,
            ..DependencyDescriptor::new(
                names::C_COMPILER,
                Probe::command("gcc --version"),
                "GCC compiler",
            )
        },
        DependencyDescriptor {
            platform: Platform::Linux,
            ..DependencyDescriptor::new(
                "pkg-config",
                Probe::command("pkg-config --version"),
                "Package configuration tool",
            )
        },
        DependencyDescriptor {
            platform: Platform::Linux,
            ..DependencyDescriptor::new("Mesa GL", Probe::package("gl"), "Mesa OpenGL library")
        },
        DependencyDescriptor {
            platform: Platform::Linux,
            ..DependencyDescriptor::new(
                "X11 Development",
                Probe::package("x11"),
                "X11 development libraries",
            )
        },
        DependencyDescriptor {
            optional: true,
            platform: Platform::Linux,
            category: Category::Compatibility,
            severity: Severity::Warning,
            issue_link: Some("https://github.com/fyne-io/fyne/issues/5908".to_string()),
            ..DependencyDescriptor::new(
                names::WAYLAND_SUPPORT,
                Probe::package("wayland-client"),
                "Wayland client library (for Wayland support)",
            )
        },
    ]
}

fn mobile_dependencies() -> Vec<DependencyDescriptor> {
    let mobile = |name: &str, probe: Probe, description: &str| DependencyDescriptor {
        optional: true,
        category: Category::Mobile,
        severity: Severity::Info,
        ..DependencyDescriptor::new(name, probe, description)
    };

    vec![
        mobile(
            names::ANDROID_SDK,
            Probe::env_var("ANDROID_HOME"),
            "Android SDK for mobile development",
        ),
        mobile(
            names::ANDROID_NDK,
            Probe::env_var("ANDROID_NDK_HOME"),
            "Android NDK for mobile development",
        ),
        mobile(
            "Android Studio",
            Probe::path_search(&["studio", "android-studio"]),
            "Android Studio IDE (recommended for mobile dev)",
        ),
        DependencyDescriptor {
            platform: Platform::MacOs,
            ..mobile(
                "iOS Simulator",
                Probe::command("xcrun simctl list devices"),
                "iOS Simulator for iOS development",
            )
        },
    ]
}

fn web_dependencies() -> Vec<DependencyDescriptor> {
    vec![
        DependencyDescriptor {
            optional: true,
            category: Category::Web,
            severity: Severity::Info,
            ..DependencyDescriptor::new(
                "WebAssembly Support",
                Probe::compound(
                    "go version | grep -q 'go1.16' && echo 'Supported' || echo 'Requires Go 1.16+'",
                ),
                "WebAssembly support for web builds",
            )
        },
        DependencyDescriptor {
            optional: true,
            category: Category::Web,
            severity: Severity::Info,
            ..DependencyDescriptor::new(
                "Node.js",
                Probe::command("node --version"),
                "Node.js for web development tools",
            )
        },
    ]
}

fn performance_dependencies() -> Vec<DependencyDescriptor> {
    vec![DependencyDescriptor {
        optional: true,
        platform: Platform::Linux,
        category: Category::Performance,
        severity: Severity::Warning,
        ..DependencyDescriptor::new(
            names::GPU_ACCELERATION,
            Probe::compound("glxinfo | grep 'direct rendering' || echo 'Not available'"),
            "GPU acceleration support (Linux)",
        )
    }]
}

fn compatibility_dependencies() -> Vec<DependencyDescriptor> {
    vec![DependencyDescriptor {
        optional: true,
        platform: Platform::Linux,
        category: Category::Compatibility,
        severity: Severity::Info,
        ..DependencyDescriptor::new(
            names::DISPLAY_SERVER,
            Probe::env_var("XDG_SESSION_TYPE"),
            "Current display server (X11/Wayland)",
        )
    }]
}

/// Build the ordered dependency list for a host.
pub fn build(host: HostOs) -> Vec<DependencyDescriptor> {
    let mut deps = core_dependencies();

    if let Some(extras) = OsExtras::for_host(host) {
        deps.extend(extras.dependencies());
    }

    deps.extend(mobile_dependencies());
    deps.extend(web_dependencies());
    deps.extend(performance_dependencies());
    deps.extend(compatibility_dependencies());
    deps
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const HOSTS: [HostOs; 4] = [HostOs::Linux, HostOs::MacOs, HostOs::Windows, HostOs::Other];

    fn names_of(deps: &[DependencyDescriptor]) -> Vec<&str> {
        deps.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn every_host_has_go_and_fyne_cli_for_all_platforms() {
        for host in HOSTS {
            let deps = build(host);
            for name in [names::GO, names::FYNE_CLI] {
                let dep = deps.iter().find(|d| d.name == name).unwrap();
                assert_eq!(dep.platform, Platform::All);
                assert!(!dep.optional);
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        for host in HOSTS {
            assert_eq!(build(host), build(host));
        }
    }

    #[test]
    fn names_are_unique() {
        for host in HOSTS {
            let deps = build(host);
            let unique: HashSet<_> = deps.iter().map(|d| &d.name).collect();
            assert_eq!(unique.len(), deps.len(), "duplicate names for {}", host);
        }
    }

    #[test]
    fn core_entries_come_first() {
        let deps = build(HostOs::Windows);
        assert_eq!(
            &names_of(&deps)[..3],
            &[names::GO, names::FYNE_CLI, names::FYNE_CROSS]
        );
        assert!(deps[2].optional);
    }

    #[test]
    fn linux_extras_follow_core() {
        let deps = build(HostOs::Linux);
        assert_eq!(
            &names_of(&deps)[3..8],
            &[
                names::C_COMPILER,
                "pkg-config",
                "Mesa GL",
                "X11 Development",
                names::WAYLAND_SUPPORT
            ]
        );
    }

    #[test]
    fn windows_and_mac_extras() {
        let win = build(HostOs::Windows);
        assert_eq!(&names_of(&win)[3..5], &["C Compiler (MSYS2)", "MSYS2"]);

        let mac = build(HostOs::MacOs);
        assert_eq!(&names_of(&mac)[3..5], &["Xcode CLI Tools", names::C_COMPILER]);
    }

    #[test]
    fn unknown_host_gets_no_extras() {
        let deps = build(HostOs::Other);
        assert_eq!(deps.len(), 3 + 4 + 2 + 1 + 1);
    }

    #[test]
    fn shared_groups_are_appended_in_order() {
        let deps = build(HostOs::Other);
        let categories: Vec<Category> = deps.iter().map(|d| d.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Core,
                Category::Core,
                Category::Core,
                Category::Mobile,
                Category::Mobile,
                Category::Mobile,
                Category::Mobile,
                Category::Web,
                Category::Web,
                Category::Performance,
                Category::Compatibility,
            ]
        );
    }

    #[test]
    fn platform_specific_entries_stay_in_every_catalog() {
        let deps = build(HostOs::Windows);
        let gpu = deps
            .iter()
            .find(|d| d.name == names::GPU_ACCELERATION)
            .unwrap();
        assert_eq!(gpu.platform, Platform::Linux);
        assert!(!gpu.applies_to(HostOs::Windows));
    }

    #[test]
    fn android_probes_read_environment() {
        let deps = build(HostOs::Linux);
        let sdk = deps.iter().find(|d| d.name == names::ANDROID_SDK).unwrap();
        assert_eq!(sdk.probe, Probe::env_var("ANDROID_HOME"));
        let ndk = deps.iter().find(|d| d.name == names::ANDROID_NDK).unwrap();
        assert_eq!(ndk.probe, Probe::env_var("ANDROID_NDK_HOME"));
    }

    #[test]
    fn wayland_support_links_issue() {
        let deps = build(HostOs::Linux);
        let wayland = deps
            .iter()
            .find(|d| d.name == names::WAYLAND_SUPPORT)
            .unwrap();
        assert!(wayland.optional);
        assert!(wayland.issue_link.as_deref().unwrap().contains("5908"));
    }
}
