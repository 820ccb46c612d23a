/*!
Dependencies between rules.

A rule *a* feeds a rule *b* when the conclusion of *a* [may overlap](crate::structures::template::Template::may_overlap) some template condition of *b*.
In other words, when some fact derived by *a* may satisfy a condition of *b*.

The dependency order is given by the strongly connected components of the graph of rules and feeds, in topological order.
Rules within a component are ordered by registration.

As a fact derived by some rule in a pass is visible to every rule evaluated after it in the same pass, evaluating rules in dependency order tends to reduce the number of passes required for closure.
Still, the facts derived are the same on any order.
*/

use petgraph::{algo::tarjan_scc, graph::DiGraph};

use crate::{db::RuleKey, structures::rule::Rule};

/// A graph with a node for each rule and an edge from *a* to *b* whenever *a* feeds *b*.
pub fn feed_graph(rules: &[Rule]) -> DiGraph<RuleKey, ()> {
    let mut graph = DiGraph::with_capacity(rules.len(), rules.len());
    let nodes = (0..rules.len())
        .map(|index| graph.add_node(RuleKey(index)))
        .collect::<Vec<_>>();

    for (producer_index, producer) in rules.iter().enumerate() {
        for (consumer_index, consumer) in rules.iter().enumerate() {
            if consumer
                .condition_templates()
                .any(|template| producer.conclusion().may_overlap(template))
            {
                graph.add_edge(nodes[producer_index], nodes[consumer_index], ());
            }
        }
    }

    graph
}

/// Keys to `rules`, in dependency order.
pub fn dependency_order(rules: &[Rule]) -> Vec<RuleKey> {
    let graph = feed_graph(rules);

    // Components are found in reverse topological order.
    let mut components = tarjan_scc(&graph);
    components.reverse();

    let mut order = Vec::with_capacity(rules.len());
    for mut component in components {
        component.sort();
        order.extend(component.into_iter().map(|node| graph[node]));
    }
    order
}
