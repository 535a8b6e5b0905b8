mod recommend_scenarios;
