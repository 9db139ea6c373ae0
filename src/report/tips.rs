//! Static installation guidance and known upstream issues.

use crate::shell::HostOs;

const FYNE_INSTALL: &str = "go install fyne.io/fyne/v2/cmd/fyne@latest";

/// Platform-specific installation steps, one line per entry.
pub fn installation_tips(host: HostOs) -> Vec<String> {
    let mut lines: Vec<String> = match host {
        HostOs::Windows => vec![
            "Windows:".into(),
            "1. Install Go from https://golang.org/dl/".into(),
            "2. Install MSYS2 from https://www.msys2.org/".into(),
            "3. Open MSYS2 MinGW 64-bit terminal and run:".into(),
            "   pacman -Syu".into(),
            "   pacman -S git mingw-w64-x86_64-toolchain".into(),
            "4. Add C:\\msys64\\mingw64\\bin to your PATH".into(),
            format!("5. Install Fyne CLI: {}", FYNE_INSTALL),
        ],
        HostOs::MacOs => vec![
            "macOS:".into(),
            "1. Install Go from https://golang.org/dl/".into(),
            "2. Install Xcode from Mac App Store".into(),
            "3. Install Xcode CLI tools: xcode-select --install".into(),
            format!("4. Install Fyne CLI: {}", FYNE_INSTALL),
        ],
        HostOs::Linux => vec![
            "Linux:".into(),
            "For Debian/Ubuntu:".into(),
            "  sudo apt-get install golang gcc libgl1-mesa-dev xorg-dev pkg-config".into(),
            String::new(),
            "For Fedora:".into(),
            "  sudo dnf install golang gcc libXcursor-devel libXrandr-devel mesa-libGL-devel libXi-devel libXinerama-devel libXxf86vm-devel".into(),
            String::new(),
            "For Arch Linux:".into(),
            "  sudo pacman -S go xorg-server-devel libxcursor libxrandr libxinerama libxi".into(),
            String::new(),
            format!("Then install Fyne CLI: {}", FYNE_INSTALL),
        ],
        HostOs::Other => vec![
            "1. Install Go from https://golang.org/dl/".into(),
            "2. Install a C compiler for your platform".into(),
            format!("3. Install Fyne CLI: {}", FYNE_INSTALL),
        ],
    };

    lines.extend([
        String::new(),
        "For mobile development:".into(),
        "- Android: Install Android Studio and NDK".into(),
        "- iOS: Requires macOS with Xcode and Apple Developer account".into(),
        String::new(),
        "For cross-platform builds:".into(),
        "  go install github.com/fyne-io/fyne-cross@latest".into(),
    ]);
    lines
}

/// Recently reported upstream problems worth knowing about.
pub const KNOWN_ISSUES: &[(&str, u32)] = &[
    ("Mobile web builds: Paste functionality issues", 5916),
    ("Android: NewMultiLineEntry scrolling problems", 5915),
    ("Mobile: Grid container performance issues", 5914),
    ("Wayland: App crashes on some systems", 5908),
    ("X11: Display wake-up crashes", 5899),
    ("Windows: UI position issues after minimize/restore", 5898),
];

pub const ISSUES_URL: &str = "https://github.com/fyne-io/fyne/issues";
