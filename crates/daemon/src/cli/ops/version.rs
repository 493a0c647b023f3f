use clap::Args;

use common::prelude::build_info;

#[derive(Args, Debug, Clone)]
pub struct Version;

#[async_trait::async_trait]
impl crate::cli::op::Op for Version {
    type Error = std::convert::Infallible;
    type Output = String;

    async fn execute(
        &self,
        _ctx: &crate::cli::op::OpContext,
    ) -> Result<Self::Output, Self::Error> {
        Ok(build_info().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::{Op, OpContext};

    #[tokio::test]
    async fn reports_build_info() {
        let remote = url::Url::parse("http://localhost:5000").unwrap();
        let ctx = OpContext::new(remote).unwrap();

        let output = Version.execute(&ctx).await.unwrap();
        assert!(output.starts_with("devcircle "));
    }
}
