use synaptic_nn::{BooleanFunction, Network, TrainConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let mut network = Network::create(&[2, 4, 1]).expect("valid topology");
    let (inputs, ideals) = BooleanFunction::Xor.truth_table();

    let config = TrainConfig::new(10_000).speed(0.7).moment(0.2);
    let outcome = network.train(&inputs, &ideals, &config).expect("well-formed truth table");
    println!("Trained for: {} epochs (error {:.6})", outcome.epochs, outcome.error);

    for input in &inputs {
        let output = network.run(input).expect("input matches the input layer")[0];
        println!("Input: {:?} -> Output: {:.4}", input, output);
    }
}
