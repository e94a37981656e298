// Generates the PredictionEngine gRPC server and client. The request/response
// messages are declared with prost derives in src/services/mod.rs, so the
// manual service builder is used and no protoc is needed.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let get_predictions = tonic_build::manual::Method::builder()
        .name("get_predictions")
        .route_name("GetPredictions")
        .input_type("crate::services::PredictionRequest")
        .output_type("crate::services::PredictionResponse")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("PredictionEngine")
        .package("predictor")
        .method(get_predictions)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
    Ok(())
}
