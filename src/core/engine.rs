use crate::domain::ports::ReportPipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ReportEngine<P: ReportPipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: ReportPipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting backup report...");

        // Gather
        println!("Gathering instance metadata...");
        let snapshot = self.pipeline.gather().await?;
        println!("Described instance plus {} disk(s)", snapshot.disks.len());
        self.monitor.log_stats("Gather");

        // Compose
        println!("Composing report...");
        let document = self.pipeline.compose(snapshot).await?;
        println!("Rendered {} ({} bytes)", document.filename, document.body.len());
        self.monitor.log_stats("Compose");

        // Publish
        println!("Writing report...");
        let output_path = self.pipeline.publish(document).await?;
        println!("Report saved to: {}", output_path);
        self.monitor.log_stats("Publish");

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        Ok(output_path)
    }
}
