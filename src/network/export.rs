use std::fmt::Write;
use std::str::FromStr;

use crate::network::network::Network;

/// Which array the charting script fills: `dataShort` or `dataLong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportVariant {
    Short,
    Long,
}

impl ExportVariant {
    pub fn array_name(self) -> &'static str {
        match self {
            ExportVariant::Short => "dataShort",
            ExportVariant::Long => "dataLong",
        }
    }
}

impl FromStr for ExportVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(ExportVariant::Short),
            "long" => Ok(ExportVariant::Long),
            other => Err(format!("unknown export variant '{other}', expected 'short' or 'long'")),
        }
    }
}

/// Renders every synapse as a pair of `array.set` statements (bias, then
/// weight) in layer, neuron, synapse order, preceded by the allocation of an
/// array with `2 * synapses + 1` slots.
pub fn to_script_array(network: &Network, variant: ExportVariant) -> String {
    let name = variant.array_name();
    let mut body = String::new();
    let mut slot = 0usize;

    for synapse in network.layers.iter()
        .flat_map(|layer| layer.neurons.iter())
        .flat_map(|neuron| neuron.synapses.iter())
    {
        // Writing into a String cannot fail.
        let _ = writeln!(body, "array.set({name}, {slot}, {})", synapse.bias);
        slot += 1;
        let _ = writeln!(body, "array.set({name}, {slot}, {})", synapse.weight);
        slot += 1;
    }

    format!("{name} = array.new_float({}, 0)\n{body}", slot + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_allocates_two_slots_per_synapse_plus_one() {
        let network = Network::create(&[2, 2, 1]).unwrap();
        let text = to_script_array(&network, ExportVariant::Short);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "dataShort = array.new_float(13, 0)");
        assert_eq!(text.lines().count(), 1 + 12);
    }

    #[test]
    fn bias_precedes_weight_in_traversal_order() {
        let mut network = Network::create(&[1, 2]).unwrap();
        let synapses = &mut network.layers[0].neurons[0].synapses;
        synapses[0].bias = 0.5;
        synapses[0].weight = -0.25;
        synapses[1].bias = 0.0;
        synapses[1].weight = 1.0;

        let text = to_script_array(&network, ExportVariant::Long);
        assert_eq!(
            text,
            "dataLong = array.new_float(5, 0)\n\
             array.set(dataLong, 0, 0.5)\n\
             array.set(dataLong, 1, -0.25)\n\
             array.set(dataLong, 2, 0)\n\
             array.set(dataLong, 3, 1)\n"
        );
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("LONG".parse::<ExportVariant>(), Ok(ExportVariant::Long));
        assert_eq!("short".parse::<ExportVariant>(), Ok(ExportVariant::Short));
        assert!("medium".parse::<ExportVariant>().is_err());
    }
}
