//! Host summary shown at the top of the report.

use crate::shell::HostOs;
use serde::Serialize;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub os: HostOs,
    pub arch: String,
    /// Logical CPUs available to this process.
    pub cpus: usize,
    /// First CPU reported by the OS, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuModel>,
    /// Total physical memory in bytes.
    pub memory_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuModel {
    pub brand: String,
    pub mhz: u64,
}

impl SystemInfo {
    /// Gather facts about the running machine.
    pub fn detect(host: HostOs) -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_frequency())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        let cpu = sys.cpus().first().map(|cpu| CpuModel {
            brand: cpu.brand().trim().to_string(),
            mhz: cpu.frequency(),
        });
        tracing::debug!("Detected CPU {:?}, {} bytes of memory", cpu, sys.total_memory());

        Self {
            os: host,
            arch: std::env::consts::ARCH.to_string(),
            cpus: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            cpu,
            memory_bytes: sys.total_memory(),
        }
    }

    /// CPU row text such as `Apple M1 @ 3200MHz`.
    pub fn cpu_label(&self) -> Option<String> {
        self.cpu
            .as_ref()
            .map(|cpu| format!("{} @ {}MHz", cpu.brand, cpu.mhz))
    }

    /// Total memory in GB with two decimals.
    pub fn memory_label(&self) -> String {
        format!("{:.2} GB", self.memory_bytes as f64 / BYTES_PER_GB)
    }
}
